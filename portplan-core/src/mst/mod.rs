//! Minimum spanning tree selection over the highway graph.
//!
//! Both strategies consume the disjoint set left behind by port pre-linking
//! and feed every highway they build into a [`PlanAccumulator`]. Candidates
//! are ranked by the strict total order `(cost, lower endpoint, higher
//! endpoint, highway id)`, so the minimum spanning forest is unique and the
//! two strategies build exactly the same highways, possibly in a different
//! order.
//!
//! Kruskal is the canonical strategy. Borůvka is kept as a selectable
//! alternative and is cross-checked against Kruskal by the property suite.

mod boruvka;
mod kruskal;

use std::{cmp::Ordering, fmt, str::FromStr};

use thiserror::Error;

use crate::{
    disjoint_set::DisjointSet,
    error::{PlanError, Result},
    network::{Highway, HighwayId, Network},
    plan::PlanAccumulator,
};

/// Algorithm used to pick highways.
///
/// # Examples
/// ```
/// use portplan_core::MstStrategy;
///
/// let strategy: MstStrategy = "boruvka".parse().expect("known strategy");
/// assert_eq!(strategy, MstStrategy::Boruvka);
/// assert_eq!(MstStrategy::default(), MstStrategy::Kruskal);
/// assert_eq!(strategy.to_string(), "boruvka");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum MstStrategy {
    /// Rank every highway once and scan greedily.
    #[default]
    Kruskal,
    /// Merge every component along its cheapest outgoing highway, round by
    /// round.
    Boruvka,
}

impl MstStrategy {
    /// Returns the lowercase name used in logs and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::Boruvka => "boruvka",
        }
    }
}

impl fmt::Display for MstStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`MstStrategy`] name.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown MST strategy `{provided}`; expected `kruskal` or `boruvka`")]
pub struct UnknownStrategy {
    provided: String,
}

impl UnknownStrategy {
    /// Returns the rejected name after trimming and lowercasing.
    #[must_use]
    pub fn provided(&self) -> &str {
        &self.provided
    }
}

impl FromStr for MstStrategy {
    type Err = UnknownStrategy;

    fn from_str(raw: &str) -> core::result::Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "kruskal" => Ok(Self::Kruskal),
            "boruvka" => Ok(Self::Boruvka),
            other => Err(UnknownStrategy {
                provided: other.to_owned(),
            }),
        }
    }
}

/// Summary of a selection pass.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Selection {
    components_remaining: usize,
    rounds: usize,
}

impl Selection {
    /// Returns the number of components left when selection stopped.
    #[must_use]
    #[rustfmt::skip]
    pub const fn components_remaining(&self) -> usize { self.components_remaining }

    /// Returns the number of passes taken: always `1` for Kruskal, the
    /// number of merge rounds for Borůvka.
    #[must_use]
    #[rustfmt::skip]
    pub const fn rounds(&self) -> usize { self.rounds }
}

/// Highway key in canonical undirected form (`low <= high`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct RankedHighway {
    cost: u64,
    low: usize,
    high: usize,
    id: HighwayId,
}

impl RankedHighway {
    pub(crate) fn new(highway: &Highway) -> Self {
        let (first, second) = highway.endpoints();
        let (low, high) = if first <= second {
            (first.get(), second.get())
        } else {
            (second.get(), first.get())
        };
        Self {
            cost: highway.cost(),
            low,
            high,
            id: highway.id(),
        }
    }

    #[rustfmt::skip]
    pub(crate) const fn id(&self) -> HighwayId { self.id }

    /// Zero-based disjoint-set slots of both endpoints.
    pub(crate) const fn slots(&self) -> (usize, usize) {
        (self.low.saturating_sub(1), self.high.saturating_sub(1))
    }
}

impl Ord for RankedHighway {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.low.cmp(&other.low))
            .then_with(|| self.high.cmp(&other.high))
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for RankedHighway {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Builds highways with `strategy` until one component remains or no
/// further merge is possible.
///
/// `set` must already reflect port pre-linking; every highway built is
/// recorded in `accumulator`.
///
/// # Errors
/// Returns [`PlanError::SetSizeMismatch`] when `set` does not track exactly
/// the cities of `network`, and [`PlanError::CostOverflow`] when the running
/// total overflows.
pub fn select_highways(
    strategy: MstStrategy,
    network: &Network,
    set: &mut DisjointSet,
    accumulator: &mut PlanAccumulator,
) -> Result<Selection> {
    if set.len() != network.city_count() {
        return Err(PlanError::SetSizeMismatch {
            tracked: set.len(),
            city_count: network.city_count(),
        });
    }

    let selection = match strategy {
        MstStrategy::Kruskal => kruskal::select(network, set, accumulator)?,
        MstStrategy::Boruvka => boruvka::select(network, set, accumulator)?,
    };

    #[cfg(feature = "metrics")]
    metrics::counter!("portplan_highways_selected", "strategy" => strategy.as_str())
        .increment(u64::try_from(accumulator.highways_used()).unwrap_or(u64::MAX));

    Ok(selection)
}

/// Builds `candidate` when it joins two components.
///
/// The highway is resolved before the union so every merge is recorded.
/// Returns `Ok(false)` when both endpoints already share a component.
fn try_build(
    network: &Network,
    set: &mut DisjointSet,
    candidate: RankedHighway,
    accumulator: &mut PlanAccumulator,
) -> Result<bool> {
    let highway = network
        .highway(candidate.id())
        .ok_or_else(|| PlanError::UnknownHighway {
            highway: candidate.id().get(),
            highway_count: network.highways().len(),
        })?;
    let (low, high) = candidate.slots();
    if !set.union_indices(low, high) {
        return Ok(false);
    }
    accumulator.record_highway(highway)?;
    Ok(true)
}


#[cfg(test)]
mod property;
