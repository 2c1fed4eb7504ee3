//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise while preparing benchmark networks so
//! setup functions can propagate failures with `?` instead of `.expect()`.

use crate::source::SyntheticError;
use portplan_core::PlanError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic network generation failed.
    #[error("synthetic network generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Network validation or planning failed.
    #[error("planning failed: {0}")]
    Plan(#[from] PlanError),
}
