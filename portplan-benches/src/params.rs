//! Benchmark parameter types.

use std::fmt;

use portplan_core::MstStrategy;

/// Parameters for a highway selection benchmark run.
#[derive(Clone, Debug)]
pub struct PlanBenchParams {
    /// Selection strategy under test.
    pub strategy: MstStrategy,
    /// Number of cities in the network.
    pub city_count: usize,
}

impl fmt::Display for PlanBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},n={}", self.strategy, self.city_count)
    }
}
