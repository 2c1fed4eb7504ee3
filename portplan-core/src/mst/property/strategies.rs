//! Network generators for the selection property suite.
//!
//! Every generator is driven by a seeded [`SmallRng`] so a failing proptest
//! case can be replayed through [`generate_fixture`] from its seed alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{NetworkDistribution, NetworkFixture};

const MIN_CITIES: usize = 2;
const MAX_CITIES: usize = 40;
/// Dense graphs stay small to keep the highway count quadratic but bounded.
const DENSE_MAX_CITIES: usize = 16;
const MAX_COST: u64 = 1_000;

pub(super) fn network_fixture_strategy() -> impl Strategy<Value = NetworkFixture> {
    (any::<NetworkDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Tiny networks for the exhaustive oracle: at most six cities and ten
/// highways, so all `2^10` highway subsets can be enumerated.
pub(super) fn tiny_fixture_strategy() -> impl Strategy<Value = NetworkFixture> {
    any::<u64>().prop_map(|seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let city_count = rng.gen_range(1..=6);
        let highway_count = rng.gen_range(0..=10);
        let highways = (0..highway_count)
            .map(|_| {
                (
                    rng.gen_range(1..=city_count),
                    rng.gen_range(1..=city_count),
                    rng.gen_range(0..=20),
                )
            })
            .collect();
        NetworkFixture {
            city_count,
            ports: sprinkle_ports(&mut rng, city_count, 0.3),
            highways,
            distribution: NetworkDistribution::Unique,
        }
    })
}

pub(super) fn generate_fixture(
    distribution: NetworkDistribution,
    rng: &mut SmallRng,
) -> NetworkFixture {
    match distribution {
        NetworkDistribution::Unique => {
            random_graph(rng, MAX_CITIES, (0.1, 0.4), distribution, |r| {
                r.gen_range(0..=MAX_COST)
            })
        }
        NetworkDistribution::ManyIdentical => {
            let pool_size = rng.gen_range(1..=3);
            let pool: Vec<u64> = (0..pool_size).map(|_| rng.gen_range(0..=10)).collect();
            random_graph(rng, MAX_CITIES, (0.2, 0.6), distribution, move |r| {
                pool[r.gen_range(0..pool.len())]
            })
        }
        NetworkDistribution::Sparse => sparse(rng),
        NetworkDistribution::Dense => {
            random_graph(rng, DENSE_MAX_CITIES, (0.7, 0.95), distribution, |r| {
                r.gen_range(0..=MAX_COST)
            })
        }
        NetworkDistribution::Disconnected => islands(rng, false),
        NetworkDistribution::PortHeavy => islands(rng, true),
    }
}

fn random_graph(
    rng: &mut SmallRng,
    max_cities: usize,
    probability_range: (f64, f64),
    distribution: NetworkDistribution,
    mut cost: impl FnMut(&mut SmallRng) -> u64,
) -> NetworkFixture {
    let city_count = rng.gen_range(MIN_CITIES..=max_cities);
    let probability = rng.gen_range(probability_range.0..=probability_range.1);
    let mut highways = Vec::new();
    for first in 1..=city_count {
        for second in (first + 1)..=city_count {
            if rng.gen_bool(probability) {
                let (a, b) = maybe_swap(rng, first, second);
                highways.push((a, b, cost(rng)));
            }
        }
    }
    NetworkFixture {
        city_count,
        ports: sprinkle_ports(rng, city_count, 0.15),
        highways,
        distribution,
    }
}

fn sparse(rng: &mut SmallRng) -> NetworkFixture {
    let city_count = rng.gen_range(MIN_CITIES..=MAX_CITIES);
    let mut order: Vec<usize> = (1..=city_count).collect();
    shuffle(&mut order, rng);

    let mut highways: Vec<(usize, usize, u64)> = order
        .windows(2)
        .filter_map(|pair| match pair {
            [a, b] => Some((*a, *b, rng.gen_range(0..=MAX_COST))),
            _ => None,
        })
        .collect();
    let extra = rng.gen_range(0..=city_count);
    for _ in 0..extra {
        let first = rng.gen_range(1..=city_count);
        let second = rng.gen_range(1..=city_count);
        highways.push((first, second, rng.gen_range(0..=MAX_COST)));
    }
    shuffle(&mut highways, rng);

    NetworkFixture {
        city_count,
        ports: sprinkle_ports(rng, city_count, 0.1),
        highways,
        distribution: NetworkDistribution::Sparse,
    }
}

/// Two to five islands with random internal highways. With `bridge_ports`
/// most islands get one port city, so some networks are only connected
/// through the port clique.
fn islands(rng: &mut SmallRng, bridge_ports: bool) -> NetworkFixture {
    let island_count = rng.gen_range(2..=5);
    let sizes: Vec<usize> = (0..island_count).map(|_| rng.gen_range(1..=8)).collect();
    let city_count = sizes.iter().sum();
    let mut highways = Vec::new();
    let mut ports = Vec::new();
    let mut offset = 0;

    for size in sizes {
        let probability = rng.gen_range(0.3..=0.8);
        for first in 1..=size {
            for second in (first + 1)..=size {
                if rng.gen_bool(probability) {
                    highways.push((offset + first, offset + second, rng.gen_range(0..=MAX_COST)));
                }
            }
        }
        if bridge_ports && rng.gen_bool(0.8) {
            ports.push((offset + rng.gen_range(1..=size), rng.gen_range(1..=MAX_COST)));
        }
        offset += size;
    }

    NetworkFixture {
        city_count,
        ports,
        highways,
        distribution: if bridge_ports {
            NetworkDistribution::PortHeavy
        } else {
            NetworkDistribution::Disconnected
        },
    }
}

/// Port records for a random subset of cities. Some records carry cost `0`
/// (no port) or repeat a city, mirroring messy input.
fn sprinkle_ports(rng: &mut SmallRng, city_count: usize, probability: f64) -> Vec<(usize, u64)> {
    let mut ports = Vec::new();
    for city in 1..=city_count {
        if rng.gen_bool(probability) {
            let cost = if rng.gen_bool(0.1) {
                0
            } else {
                rng.gen_range(1..=MAX_COST)
            };
            ports.push((city, cost));
        }
    }
    if !ports.is_empty() && rng.gen_bool(0.2) {
        let city = rng.gen_range(1..=city_count);
        ports.push((city, rng.gen_range(1..=MAX_COST)));
    }
    ports
}

fn maybe_swap(rng: &mut SmallRng, first: usize, second: usize) -> (usize, usize) {
    if rng.gen_bool(0.5) {
        (second, first)
    } else {
        (first, second)
    }
}

fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
