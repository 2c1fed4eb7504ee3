//! Clap definitions and execution for the `plan` command.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use portplan_core::{Highway, MstStrategy, PlanError, PlanOutcome, PlannerBuilder};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::input::{InputError, parse_network};

/// Path spelling that selects standard input.
const STDIN_PATH: &str = "-";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "portplan",
    about = "Plan the cheapest set of ports and highways connecting every city."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute a connection plan for a network description.
    Plan(PlanCommand),
}

/// Options accepted by the `plan` command.
#[derive(Debug, Args, Clone)]
pub struct PlanCommand {
    /// Network description to read; standard input when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Algorithm used to select highways.
    #[arg(long, default_value_t = MstStrategy::Kruskal)]
    pub strategy: MstStrategy,

    /// Print every built highway after the totals.
    #[arg(long)]
    pub show_highways: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the network description failed.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure; `-` for standard input.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The network description was malformed.
    #[error(transparent)]
    Input(#[from] InputError),
    /// The network was rejected or planning failed.
    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// Result of running the `plan` command, ready for rendering.
#[derive(Debug, Clone)]
pub struct PlanSummary {
    /// Strategy the plan was computed with.
    pub strategy: MstStrategy,
    /// Planner outcome.
    pub outcome: PlanOutcome,
    /// Built highways in selection order; empty when infeasible.
    pub built: Vec<Highway>,
    /// Whether [`render_outcome`] lists the built highways.
    pub show_highways: bool,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or parsed, or when the
/// network is rejected.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use portplan_cli::cli::{Cli, Command, PlanCommand, run_cli};
/// # use portplan_core::MstStrategy;
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "2\n0\n1\n1 2 5\n")?;
/// let cli = Cli {
///     command: Command::Plan(PlanCommand {
///         input: Some(file.path().to_path_buf()),
///         strategy: MstStrategy::Kruskal,
///         show_highways: false,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.outcome.plan().map(|plan| plan.total_cost()), Some(5));
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<PlanSummary, CliError> {
    match cli.command {
        Command::Plan(plan) => {
            Span::current().record("command", "plan");
            run_plan(plan)
        }
    }
}

fn run_plan(command: PlanCommand) -> Result<PlanSummary, CliError> {
    let PlanCommand {
        input,
        strategy,
        show_highways,
    } = command;
    let text = match input {
        Some(path) if path.as_os_str() != STDIN_PATH => read_file(&path)?,
        _ => read_stdin()?,
    };
    let mut summary = plan_text(&text, strategy)?;
    summary.show_highways = show_highways;
    Ok(summary)
}

/// Parses `text` as a network description and plans it with `strategy`.
///
/// # Errors
/// Returns [`CliError::Input`] for malformed text and [`CliError::Plan`] when
/// the network is rejected or the total cost overflows.
#[instrument(
    name = "cli.plan",
    err,
    skip(text),
    fields(strategy = %strategy, bytes = text.len()),
)]
pub fn plan_text(text: &str, strategy: MstStrategy) -> Result<PlanSummary, CliError> {
    let network = parse_network(text)?.build()?;
    let outcome = PlannerBuilder::new()
        .with_strategy(strategy)
        .build()
        .plan(&network)?;

    let built: Vec<Highway> = outcome
        .plan()
        .map(|plan| {
            plan.highways()
                .iter()
                .filter_map(|id| network.highway(*id).copied())
                .collect()
        })
        .unwrap_or_default();

    info!(
        feasible = outcome.is_success(),
        highways_built = built.len(),
        "command completed"
    );
    Ok(PlanSummary {
        strategy,
        outcome,
        built,
        show_highways: false,
    })
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_stdin() -> Result<String, CliError> {
    let mut text = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut text)
        .map_err(|source| CliError::Io {
            path: PathBuf::from(STDIN_PATH),
            source,
        })?;
    Ok(text)
}

/// Renders `summary` to `writer`.
///
/// A feasible plan prints the total cost on the first line and
/// `ports_built highways_used` on the second, followed by one
/// `first second cost` line per built highway when requested. An infeasible
/// network prints the single line `Impossible`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use portplan_cli::cli::{plan_text, render_outcome};
/// # use portplan_core::MstStrategy;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = plan_text("4 0 4 1 2 1 2 3 2 3 4 3 1 4 10", MstStrategy::Kruskal)?;
/// let mut buffer = Vec::new();
/// render_outcome(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "6\n0 3\n");
/// # Ok(())
/// # }
/// ```
pub fn render_outcome(summary: &PlanSummary, mut writer: impl Write) -> io::Result<()> {
    let PlanOutcome::Success(plan) = &summary.outcome else {
        return writeln!(writer, "Impossible");
    };
    writeln!(writer, "{}", plan.total_cost())?;
    writeln!(writer, "{} {}", plan.ports_built(), plan.highways_used())?;
    if summary.show_highways {
        for highway in &summary.built {
            let (first, second) = highway.endpoints();
            writeln!(writer, "{first} {second} {}", highway.cost())?;
        }
    }
    Ok(())
}
