//! Round-based component-local greedy selection.
//!
//! Each round snapshots every city's root, finds the cheapest outgoing
//! highway of every component through the per-city adjacency lists, and then
//! applies the merges sequentially through the disjoint set. Two components
//! that pick the same highway merge once; the second union is a no-op.
//!
//! The per-city scan only reads the root snapshot, so with the `parallel`
//! feature it runs on the rayon pool. Merges always stay sequential.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::{
    disjoint_set::DisjointSet,
    error::Result,
    network::{CityId, Network},
    plan::PlanAccumulator,
};

use super::{RankedHighway, Selection, try_build};

/// Cheapest highway leaving the component of the city at `slot`.
fn cheapest_from_city(network: &Network, roots: &[usize], slot: usize) -> Option<RankedHighway> {
    let root = *roots.get(slot)?;
    let city = CityId::from_index(slot);
    network
        .incident_at(slot)
        .iter()
        .filter_map(|id| network.highway(*id))
        .filter(|highway| {
            highway
                .other(city)
                .and_then(|other| roots.get(other.index()))
                .is_some_and(|other_root| *other_root != root)
        })
        .map(RankedHighway::new)
        .min()
}

/// Cheapest outgoing highway per component, indexed by root slot.
fn cheapest_per_component(network: &Network, roots: &[usize]) -> Vec<Option<RankedHighway>> {
    #[cfg(feature = "parallel")]
    let per_city: Vec<Option<RankedHighway>> = (0..roots.len())
        .into_par_iter()
        .map(|slot| cheapest_from_city(network, roots, slot))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let per_city: Vec<Option<RankedHighway>> = (0..roots.len())
        .map(|slot| cheapest_from_city(network, roots, slot))
        .collect();

    let mut cheapest: Vec<Option<RankedHighway>> = vec![None; roots.len()];
    for (root, candidate) in roots.iter().zip(per_city) {
        let Some(candidate) = candidate else {
            continue;
        };
        if let Some(best) = cheapest.get_mut(*root) {
            *best = match *best {
                Some(current) if current <= candidate => Some(current),
                _ => Some(candidate),
            };
        }
    }
    cheapest
}

#[instrument(
    name = "core.boruvka",
    err,
    skip_all,
    fields(highways = network.highways().len(), components = set.component_count()),
)]
pub(super) fn select(
    network: &Network,
    set: &mut DisjointSet,
    accumulator: &mut PlanAccumulator,
) -> Result<Selection> {
    let city_count = network.city_count();
    let mut rounds = 0_usize;

    while set.component_count() > 1 {
        rounds = rounds.saturating_add(1);
        let roots: Vec<usize> = (0..city_count).map(|slot| set.find_index(slot)).collect();
        let cheapest = cheapest_per_component(network, &roots);

        let mut merged = 0_usize;
        for candidate in cheapest.into_iter().flatten() {
            if try_build(network, set, candidate, accumulator)? {
                merged = merged.saturating_add(1);
            }
        }

        debug!(
            round = rounds,
            merged,
            components = set.component_count(),
            "boruvka round finished"
        );
        if merged == 0 {
            break;
        }
    }

    #[cfg(feature = "metrics")]
    metrics::counter!("portplan_boruvka_rounds")
        .increment(u64::try_from(rounds).unwrap_or(u64::MAX));

    Ok(Selection {
        components_remaining: set.component_count(),
        rounds,
    })
}
