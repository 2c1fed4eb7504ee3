//! Seeded synthetic networks.
//!
//! Every generated network contains a random spanning tree, so it is always
//! connectable; extra highways and optional ports make the selection work
//! non-trivial.

use portplan_core::NetworkBuilder;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors raised by invalid synthetic configurations.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SyntheticError {
    /// A network needs at least one city.
    #[error("city_count must be greater than zero")]
    ZeroCities,
    /// Highway costs are drawn from `1..=max_cost`.
    #[error("max_cost must be greater than zero")]
    ZeroMaxCost,
}

/// Shape of a synthetic network.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of cities.
    pub city_count: usize,
    /// Random highways added on top of the spanning tree.
    pub extra_highways: usize,
    /// Every `port_stride`-th city gets a port; `0` disables ports.
    pub port_stride: usize,
    /// Upper bound for highway and port costs.
    pub max_cost: u64,
    /// Seed for the generator.
    pub seed: u64,
}

/// Generates a [`NetworkBuilder`] for `config`.
///
/// # Errors
/// Returns [`SyntheticError`] when `config` has no cities or a zero cost
/// bound.
///
/// # Examples
/// ```
/// use portplan_benches::source::{SyntheticConfig, generate};
///
/// let config = SyntheticConfig {
///     city_count: 10,
///     extra_highways: 5,
///     port_stride: 0,
///     max_cost: 100,
///     seed: 7,
/// };
/// let network = generate(&config)?.build()?;
/// assert_eq!(network.highways().len(), 14);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn generate(config: &SyntheticConfig) -> Result<NetworkBuilder, SyntheticError> {
    if config.city_count == 0 {
        return Err(SyntheticError::ZeroCities);
    }
    if config.max_cost == 0 {
        return Err(SyntheticError::ZeroMaxCost);
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut builder = NetworkBuilder::new(config.city_count);

    for city in 2..=config.city_count {
        let parent = rng.gen_range(1..city);
        builder.push_highway(parent, city, rng.gen_range(1..=config.max_cost));
    }
    for _ in 0..config.extra_highways {
        let first = rng.gen_range(1..=config.city_count);
        let second = rng.gen_range(1..=config.city_count);
        builder.push_highway(first, second, rng.gen_range(1..=config.max_cost));
    }
    if config.port_stride > 0 {
        for city in (config.port_stride..=config.city_count).step_by(config.port_stride) {
            builder.push_port(city, rng.gen_range(1..=config.max_cost));
        }
    }
    Ok(builder)
}
