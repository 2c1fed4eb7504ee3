//! Global sort then greedy scan.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::{disjoint_set::DisjointSet, error::Result, network::Network, plan::PlanAccumulator};

use super::{RankedHighway, Selection, try_build};

fn rank_highways(network: &Network) -> Vec<RankedHighway> {
    let mut ranked: Vec<RankedHighway> =
        network.highways().iter().map(RankedHighway::new).collect();

    #[cfg(feature = "parallel")]
    ranked.par_sort_unstable();
    #[cfg(not(feature = "parallel"))]
    ranked.sort_unstable();

    ranked
}

#[instrument(
    name = "core.kruskal",
    err,
    skip_all,
    fields(highways = network.highways().len(), components = set.component_count()),
)]
pub(super) fn select(
    network: &Network,
    set: &mut DisjointSet,
    accumulator: &mut PlanAccumulator,
) -> Result<Selection> {
    let ranked = rank_highways(network);
    let mut examined = 0_usize;

    for candidate in ranked {
        if set.component_count() <= 1 {
            break;
        }
        examined = examined.saturating_add(1);

        try_build(network, set, candidate, accumulator)?;
    }

    debug!(
        examined,
        built = accumulator.highways_used(),
        components = set.component_count(),
        "kruskal scan finished"
    );
    Ok(Selection {
        components_remaining: set.component_count(),
        rounds: 1,
    })
}
