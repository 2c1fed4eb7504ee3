//! Fixture types for the selection property suite.

use test_strategy::Arbitrary;

use crate::{Network, NetworkBuilder, PlanError};

/// Shape of a generated network.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum NetworkDistribution {
    /// Random graph whose highway costs are mostly distinct.
    #[weight(2)]
    Unique,
    /// Costs drawn from a pool of one to three values, stressing tie-breaks.
    #[weight(3)]
    ManyIdentical,
    /// Random spanning path plus a handful of extra highways.
    #[weight(2)]
    Sparse,
    /// Nearly complete graph on few cities.
    #[weight(1)]
    Dense,
    /// Several islands with no highway between them.
    #[weight(2)]
    Disconnected,
    /// Islands bridged only by ports on some of their cities.
    #[weight(2)]
    PortHeavy,
}

/// Generated network plus the distribution that produced it, kept for
/// failure messages.
#[derive(Clone, Debug)]
pub(super) struct NetworkFixture {
    pub city_count: usize,
    pub ports: Vec<(usize, u64)>,
    pub highways: Vec<(usize, usize, u64)>,
    pub distribution: NetworkDistribution,
}

impl NetworkFixture {
    pub(super) fn network(&self) -> Result<Network, PlanError> {
        let mut builder = NetworkBuilder::new(self.city_count);
        for &(city, cost) in &self.ports {
            builder.push_port(city, cost);
        }
        for &(first, second, cost) in &self.highways {
            builder.push_highway(first, second, cost);
        }
        builder.build()
    }

    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, cities={}, ports={}, highways={}",
            self.distribution,
            self.city_count,
            self.ports.len(),
            self.highways.len(),
        )
    }
}
