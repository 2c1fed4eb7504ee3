//! Plan accumulation and outcome types.
//!
//! The accumulator is seeded with the port clique and then fed every highway
//! the MST selector builds. It never decides which highways to build; it only
//! sums and counts what it is given.

use crate::{
    error::{PlanError, Result},
    network::{Highway, HighwayId},
    ports::PortClique,
};

/// Whether a highway ended up in the plan.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BuildStatus {
    /// Not selected by the MST pass.
    Pending,
    /// Selected and paid for.
    Built,
}

/// A complete plan connecting every city.
///
/// # Examples
/// ```
/// use portplan_core::{NetworkBuilder, PlannerBuilder};
///
/// let network = NetworkBuilder::new(2).with_highway(1, 2, 5).build()?;
/// let plan = PlannerBuilder::new()
///     .build()
///     .plan(&network)?
///     .into_plan()
///     .expect("two cities joined by a highway are connected");
/// assert_eq!(plan.total_cost(), 5);
/// assert_eq!((plan.ports_built(), plan.highways_used()), (0, 1));
/// # Ok::<(), portplan_core::PlanError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Plan {
    total_cost: u64,
    ports_built: usize,
    highways: Vec<HighwayId>,
    highway_count: usize,
}

impl Plan {
    /// Returns the sum of every port cost and every built highway cost.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_cost(&self) -> u64 { self.total_cost }

    /// Returns the number of ports built.
    #[must_use]
    #[rustfmt::skip]
    pub const fn ports_built(&self) -> usize { self.ports_built }

    /// Returns the number of highways built.
    #[must_use]
    pub const fn highways_used(&self) -> usize {
        self.highways.len()
    }

    /// Returns the built highways in selection order.
    #[must_use]
    #[rustfmt::skip]
    pub fn highways(&self) -> &[HighwayId] { &self.highways }

    /// Reports whether `highway` was built. Unknown ids report
    /// [`BuildStatus::Pending`].
    #[must_use]
    pub fn status(&self, highway: HighwayId) -> BuildStatus {
        if self.highways.contains(&highway) {
            BuildStatus::Built
        } else {
            BuildStatus::Pending
        }
    }

    /// Returns the build status of every highway in input order.
    #[must_use]
    pub fn statuses(&self) -> Vec<BuildStatus> {
        let mut statuses = vec![BuildStatus::Pending; self.highway_count];
        for id in &self.highways {
            if let Some(slot) = statuses.get_mut(id.get()) {
                *slot = BuildStatus::Built;
            }
        }
        statuses
    }
}

/// Details of a network that cannot be connected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Infeasible {
    components_remaining: usize,
}

impl Infeasible {
    /// Returns how many components were left once no highway could merge
    /// any further.
    #[must_use]
    #[rustfmt::skip]
    pub const fn components_remaining(&self) -> usize { self.components_remaining }
}

/// Terminal state of a planning run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PlanOutcome {
    /// Every city is connected.
    Success(Plan),
    /// No combination of ports and highways connects every city.
    Infeasible(Infeasible),
}

impl PlanOutcome {
    /// Returns `true` for [`PlanOutcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Borrows the plan when the outcome is a success.
    #[must_use]
    pub const fn plan(&self) -> Option<&Plan> {
        match self {
            Self::Success(plan) => Some(plan),
            Self::Infeasible(_) => None,
        }
    }

    /// Consumes the outcome, keeping the plan when it is a success.
    #[must_use]
    pub fn into_plan(self) -> Option<Plan> {
        match self {
            Self::Success(plan) => Some(plan),
            Self::Infeasible(_) => None,
        }
    }
}

/// Running totals for one planning run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlanAccumulator {
    total_cost: u64,
    ports_built: usize,
    highways: Vec<HighwayId>,
}

impl PlanAccumulator {
    /// Starts a run with every port of `clique` already paid for.
    #[must_use]
    pub fn seeded(clique: &PortClique) -> Self {
        Self {
            total_cost: clique.port_cost(),
            ports_built: clique.ports_built(),
            highways: Vec::new(),
        }
    }

    /// Adds a built highway to the running totals.
    ///
    /// # Errors
    /// Returns [`PlanError::CostOverflow`] when the total no longer fits in
    /// `u64`.
    pub fn record_highway(&mut self, highway: &Highway) -> Result<()> {
        self.total_cost =
            self.total_cost
                .checked_add(highway.cost())
                .ok_or(PlanError::CostOverflow {
                    context: "highway costs",
                })?;
        self.highways.push(highway.id());
        Ok(())
    }

    /// Returns the cost accumulated so far.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_cost(&self) -> u64 { self.total_cost }

    /// Returns the number of highways recorded so far.
    #[must_use]
    pub const fn highways_used(&self) -> usize {
        self.highways.len()
    }

    /// Closes the run. Exactly one remaining component means success.
    ///
    /// `highway_count` is the number of highways in the network and sizes
    /// [`Plan::statuses`].
    #[must_use]
    pub fn finish(self, components_remaining: usize, highway_count: usize) -> PlanOutcome {
        if components_remaining == 1 {
            PlanOutcome::Success(Plan {
                total_cost: self.total_cost,
                ports_built: self.ports_built,
                highways: self.highways,
                highway_count,
            })
        } else {
            PlanOutcome::Infeasible(Infeasible {
                components_remaining,
            })
        }
    }
}
