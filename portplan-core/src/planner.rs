//! Planning orchestration.
//!
//! A [`Planner`] owns no graph state between runs: every call to
//! [`Planner::plan`] builds a fresh disjoint set and accumulator, so the same
//! [`Network`] always yields the same [`PlanOutcome`].

use tracing::{Span, field, info, instrument, warn};

use crate::{
    disjoint_set::DisjointSet,
    error::Result,
    mst::{MstStrategy, select_highways},
    network::Network,
    plan::{PlanAccumulator, PlanOutcome},
    ports::PortClique,
};

/// Configures and constructs [`Planner`] instances.
///
/// # Examples
/// ```
/// use portplan_core::{MstStrategy, PlannerBuilder};
///
/// let planner = PlannerBuilder::new()
///     .with_strategy(MstStrategy::Boruvka)
///     .build();
/// assert_eq!(planner.strategy(), MstStrategy::Boruvka);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PlannerBuilder {
    strategy: MstStrategy,
}

impl PlannerBuilder {
    /// Creates a builder using [`MstStrategy::Kruskal`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the MST strategy.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: MstStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured strategy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn strategy(&self) -> MstStrategy { self.strategy }

    /// Constructs the planner.
    #[must_use]
    pub const fn build(self) -> Planner {
        Planner {
            strategy: self.strategy,
        }
    }
}

/// Entry point for computing a connection plan.
///
/// # Examples
/// ```
/// use portplan_core::{NetworkBuilder, PlanOutcome, PlannerBuilder};
///
/// let network = NetworkBuilder::new(3)
///     .with_port(1, 10)
///     .with_port(2, 7)
///     .with_port(3, 4)
///     .build()?;
/// let outcome = PlannerBuilder::new().build().plan(&network)?;
/// let plan = outcome.plan().expect("ports alone connect every city");
/// assert_eq!(plan.total_cost(), 21);
/// assert_eq!((plan.ports_built(), plan.highways_used()), (3, 0));
/// # Ok::<(), portplan_core::PlanError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Planner {
    strategy: MstStrategy,
}

impl Planner {
    /// Returns the strategy used by [`Self::plan`].
    #[must_use]
    #[rustfmt::skip]
    pub const fn strategy(&self) -> MstStrategy { self.strategy }

    /// Links the port clique, selects highways and totals the plan.
    ///
    /// An unconnectable network is reported as
    /// [`PlanOutcome::Infeasible`], not as an error.
    ///
    /// # Errors
    /// Returns [`crate::PlanError::CostOverflow`] when the total cost does not
    /// fit in `u64`, and [`crate::PlanError::NetworkTooLarge`] when the
    /// disjoint set cannot be allocated.
    #[instrument(
        name = "core.plan",
        err,
        skip(self, network),
        fields(
            strategy = %self.strategy,
            cities = network.city_count(),
            highways = network.highways().len(),
            ports = field::Empty,
        ),
    )]
    pub fn plan(&self, network: &Network) -> Result<PlanOutcome> {
        let mut set = DisjointSet::try_new(network.city_count())?;
        let clique = PortClique::link(network, &mut set)?;
        Span::current().record("ports", clique.ports_built());

        let mut accumulator = PlanAccumulator::seeded(&clique);
        let selection = select_highways(self.strategy, network, &mut set, &mut accumulator)?;
        let outcome = accumulator.finish(
            selection.components_remaining(),
            network.highways().len(),
        );

        match &outcome {
            PlanOutcome::Success(plan) => info!(
                total_cost = plan.total_cost(),
                ports_built = plan.ports_built(),
                highways_used = plan.highways_used(),
                rounds = selection.rounds(),
                "plan completed"
            ),
            PlanOutcome::Infeasible(infeasible) => {
                warn!(
                    components_remaining = infeasible.components_remaining(),
                    rounds = selection.rounds(),
                    "network cannot be connected"
                );
                #[cfg(feature = "metrics")]
                metrics::counter!("portplan_plans_infeasible").increment(1);
            }
        }
        Ok(outcome)
    }
}
