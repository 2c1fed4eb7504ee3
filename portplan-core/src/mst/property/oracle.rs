//! Reference oracles for highway selection.
//!
//! [`sequential_plan`] is a plain-vector Kruskal that shares nothing with the
//! production disjoint set or ranking code. [`exhaustive_min_cost`] tries
//! every subset of highways and is only usable on tiny networks.

use std::collections::BTreeMap;

use super::types::NetworkFixture;

/// Result of the sequential oracle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct SequentialPlan {
    /// Port costs plus every selected highway cost.
    pub total_cost: u64,
    /// Number of cities with a port.
    pub ports_built: usize,
    /// Input indices of the selected highways, ascending.
    pub highways: Vec<usize>,
    /// Components left after every highway has been scanned.
    pub components: usize,
}

/// Effective port table: the last record per city wins and cost `0` means no
/// port.
pub(super) fn effective_ports(fixture: &NetworkFixture) -> BTreeMap<usize, u64> {
    let mut ports = BTreeMap::new();
    for &(city, cost) in &fixture.ports {
        ports.insert(city, cost);
    }
    ports.retain(|_, cost| *cost != 0);
    ports
}

/// Sequential Kruskal with the port cities merged up front.
///
/// Highways are sorted by `(cost, lower endpoint, higher endpoint, input
/// index)`, the same strict order production selection uses, so the chosen
/// highway set must match exactly.
pub(super) fn sequential_plan(fixture: &NetworkFixture) -> SequentialPlan {
    let ports = effective_ports(fixture);
    let mut parent: Vec<usize> = (0..fixture.city_count).collect();
    let mut components = fixture.city_count;

    let mut anchor = None;
    for &city in ports.keys() {
        match anchor {
            None => anchor = Some(city - 1),
            Some(root) => {
                if merge(&mut parent, root, city - 1) {
                    components -= 1;
                }
            }
        }
    }

    let mut order: Vec<(u64, usize, usize, usize)> = fixture
        .highways
        .iter()
        .enumerate()
        .map(|(index, &(a, b, cost))| (cost, a.min(b), a.max(b), index))
        .collect();
    order.sort_unstable();

    let mut total_cost: u64 = ports.values().sum();
    let mut highways = Vec::new();
    for (cost, low, high, index) in order {
        if merge(&mut parent, low - 1, high - 1) {
            components -= 1;
            total_cost += cost;
            highways.push(index);
        }
    }
    highways.sort_unstable();

    SequentialPlan {
        total_cost,
        ports_built: ports.len(),
        highways,
        components,
    }
}

/// Cheapest connecting plan found by brute force, or `None` when no subset
/// of highways connects the network.
///
/// # Panics
/// Panics when the fixture has more than 16 highways.
pub(super) fn exhaustive_min_cost(fixture: &NetworkFixture) -> Option<u64> {
    let highway_count = fixture.highways.len();
    assert!(highway_count <= 16, "exhaustive oracle needs a tiny network");
    let ports = effective_ports(fixture);
    let port_cost: u64 = ports.values().sum();
    let port_cities: Vec<usize> = ports.keys().map(|city| city - 1).collect();

    let mut best = None;
    for mask in 0_u32..(1 << highway_count) {
        let mut parent: Vec<usize> = (0..fixture.city_count).collect();
        let mut components = fixture.city_count;
        for pair in port_cities.windows(2) {
            if let [a, b] = pair
                && merge(&mut parent, *a, *b)
            {
                components -= 1;
            }
        }
        let mut cost = port_cost;
        for (index, &(a, b, highway_cost)) in fixture.highways.iter().enumerate() {
            if mask & (1 << index) != 0 {
                cost += highway_cost;
                if merge(&mut parent, a - 1, b - 1) {
                    components -= 1;
                }
            }
        }
        if components == 1 && best.is_none_or(|current| cost < current) {
            best = Some(cost);
        }
    }
    best
}

fn find(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

fn merge(parent: &mut [usize], a: usize, b: usize) -> bool {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra == rb {
        return false;
    }
    parent[rb] = ra;
    true
}
