//! Command-line interface orchestration for portplan.
//!
//! The CLI offers a single `plan` command that reads a network description
//! from a file or standard input, plans it and renders the totals.

mod commands;
mod input;

pub use commands::{
    Cli, CliError, Command, PlanCommand, PlanSummary, plan_text, render_outcome, run_cli,
};
pub use input::{InputError, parse_network};
