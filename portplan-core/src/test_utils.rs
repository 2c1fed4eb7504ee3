//! Shared test utilities for `portplan-core`.

use proptest::test_runner::Config as ProptestConfig;

use crate::network::{Network, NetworkBuilder};

/// Environment variable overriding the number of cases per property suite.
const CASES_ENV: &str = "PORTPLAN_PBT_CASES";

/// Builds the proptest configuration shared by every property suite.
///
/// `PORTPLAN_PBT_CASES` overrides `default_cases` so CI can run longer
/// sweeps without touching the suites.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let cases = std::env::var(CASES_ENV)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default_cases);
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

/// Builds a network from literal port and highway tables, panicking on
/// invalid ids since fixtures are expected to be well formed.
pub(crate) fn network(
    city_count: usize,
    ports: &[(usize, u64)],
    highways: &[(usize, usize, u64)],
) -> Network {
    let mut builder = NetworkBuilder::new(city_count);
    for &(city, cost) in ports {
        builder.push_port(city, cost);
    }
    for &(first, second, cost) in highways {
        builder.push_highway(first, second, cost);
    }
    match builder.build() {
        Ok(network) => network,
        Err(err) => panic!("fixture network must be valid: {err}"),
    }
}
