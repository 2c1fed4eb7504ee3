//! City network model.
//!
//! A [`Network`] is an immutable arena of cities and highways built once per
//! input through [`NetworkBuilder`]. Cities are addressed by one-based
//! [`CityId`]s, highways by their zero-based position in input order
//! ([`HighwayId`]). Each city keeps the ids of its incident highways so
//! component-local scans never walk the whole highway list.

use std::fmt;

use tracing::{Level, debug, enabled, instrument, trace};

use crate::error::{PlanError, Result};

/// One-based identifier of a city.
///
/// # Examples
/// ```
/// use portplan_core::CityId;
///
/// let city = CityId::new(3);
/// assert_eq!(city.get(), 3);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CityId(usize);

impl CityId {
    /// Wraps a raw city id. Range checks happen when the id is used against a
    /// concrete [`Network`] or [`crate::DisjointSet`].
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns the raw one-based id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> usize { self.0 }

    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index.saturating_add(1))
    }

    /// Zero-based slot. Only meaningful once the id has been range checked.
    pub(crate) const fn index(self) -> usize {
        self.0.saturating_sub(1)
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zero-based position of a highway in input order.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct HighwayId(usize);

impl HighwayId {
    /// Wraps a raw highway position.
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns the raw zero-based position.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> usize { self.0 }
}

impl fmt::Display for HighwayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A city and the cost of building a port there.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct City {
    id: CityId,
    port_cost: u64,
}

impl City {
    /// Returns the city id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> CityId { self.id }

    /// Returns the port cost; `0` means no port can be built.
    #[must_use]
    #[rustfmt::skip]
    pub const fn port_cost(&self) -> u64 { self.port_cost }

    /// Returns `true` when this city joins the port clique.
    #[must_use]
    pub const fn has_port(&self) -> bool {
        self.port_cost != 0
    }
}

/// A buildable highway between two cities.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Highway {
    id: HighwayId,
    first: CityId,
    second: CityId,
    cost: u64,
}

impl Highway {
    /// Returns the highway id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> HighwayId { self.id }

    /// Returns the endpoints in input order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn endpoints(&self) -> (CityId, CityId) { (self.first, self.second) }

    /// Returns the build cost.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cost(&self) -> u64 { self.cost }

    /// Returns the endpoint opposite `city`, or `None` when `city` is not an
    /// endpoint.
    #[must_use]
    pub fn other(&self, city: CityId) -> Option<CityId> {
        if city == self.first {
            Some(self.second)
        } else if city == self.second {
            Some(self.first)
        } else {
            None
        }
    }

    /// Returns `true` when both endpoints are the same city.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.first == self.second
    }
}

/// Validated, immutable city network.
///
/// # Examples
/// ```
/// use portplan_core::{CityId, NetworkBuilder};
///
/// let network = NetworkBuilder::new(3)
///     .with_port(1, 10)
///     .with_highway(2, 3, 4)
///     .build()
///     .expect("ids are in range");
/// assert_eq!(network.city_count(), 3);
/// assert_eq!(network.ports_built(), 1);
/// assert_eq!(network.incident(CityId::new(3)).expect("city exists").len(), 1);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Network {
    cities: Vec<City>,
    highways: Vec<Highway>,
    adjacency: Vec<Vec<HighwayId>>,
}

impl Network {
    /// Returns the number of cities.
    #[must_use]
    pub const fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Returns every city ordered by id.
    #[must_use]
    #[rustfmt::skip]
    pub fn cities(&self) -> &[City] { &self.cities }

    /// Returns every highway in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn highways(&self) -> &[Highway] { &self.highways }

    /// Looks up a city by id.
    ///
    /// # Errors
    /// Returns [`PlanError::CityOutOfRange`] when `id` is not in the network.
    pub fn city(&self, id: CityId) -> Result<&City> {
        self.check(id)?;
        self.cities
            .get(id.index())
            .ok_or_else(|| PlanError::CityOutOfRange {
                city: id.get(),
                city_count: self.city_count(),
            })
    }

    /// Looks up a highway by id.
    #[must_use]
    pub fn highway(&self, id: HighwayId) -> Option<&Highway> {
        self.highways.get(id.get())
    }

    /// Returns the highways touching `id` in input order.
    ///
    /// # Errors
    /// Returns [`PlanError::CityOutOfRange`] when `id` is not in the network.
    pub fn incident(&self, id: CityId) -> Result<&[HighwayId]> {
        self.check(id)?;
        Ok(self.incident_at(id.index()))
    }

    /// Iterates over cities that can build a port.
    pub fn port_cities(&self) -> impl Iterator<Item = &City> + '_ {
        self.cities.iter().filter(|city| city.has_port())
    }

    /// Returns the number of cities with a non-zero port cost.
    #[must_use]
    pub fn ports_built(&self) -> usize {
        self.port_cities().count()
    }

    pub(crate) fn incident_at(&self, index: usize) -> &[HighwayId] {
        self.adjacency
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn check(&self, id: CityId) -> Result<()> {
        check_city(id.get(), self.city_count())
    }

    fn trace_contents(&self) {
        for city in &self.cities {
            trace!(
                city = city.id.get(),
                port_cost = city.port_cost,
                highways = self.incident_at(city.id.index()).len(),
                "city"
            );
        }
        for highway in &self.highways {
            trace!(
                highway = highway.id.get(),
                first = highway.first.get(),
                second = highway.second.get(),
                cost = highway.cost,
                "highway"
            );
        }
    }
}

/// Collects raw port and highway records and validates them into a
/// [`Network`].
///
/// Later port records for the same city replace earlier ones.
#[derive(Clone, Debug, Default)]
pub struct NetworkBuilder {
    city_count: usize,
    ports: Vec<(usize, u64)>,
    highways: Vec<(usize, usize, u64)>,
}

impl NetworkBuilder {
    /// Starts a network with `city_count` cities numbered `1..=city_count`.
    #[must_use]
    pub fn new(city_count: usize) -> Self {
        Self {
            city_count,
            ..Self::default()
        }
    }

    /// Returns the declared number of cities.
    #[must_use]
    #[rustfmt::skip]
    pub const fn city_count(&self) -> usize { self.city_count }

    /// Records a port record for `city`.
    #[must_use]
    pub fn with_port(mut self, city: usize, cost: u64) -> Self {
        self.push_port(city, cost);
        self
    }

    /// Records a highway between `first` and `second`.
    #[must_use]
    pub fn with_highway(mut self, first: usize, second: usize, cost: u64) -> Self {
        self.push_highway(first, second, cost);
        self
    }

    /// In-place form of [`Self::with_port`] for streaming readers.
    pub fn push_port(&mut self, city: usize, cost: u64) {
        self.ports.push((city, cost));
    }

    /// In-place form of [`Self::with_highway`] for streaming readers.
    pub fn push_highway(&mut self, first: usize, second: usize, cost: u64) {
        self.highways.push((first, second, cost));
    }

    /// Validates every record and builds the network.
    ///
    /// # Errors
    /// Returns [`PlanError::EmptyNetwork`] when no cities were declared,
    /// [`PlanError::NetworkTooLarge`] when per-city storage cannot be
    /// reserved, and [`PlanError::CityOutOfRange`] for the first record
    /// naming a city outside `1..=city_count`.
    #[instrument(
        name = "core.build_network",
        level = "debug",
        err,
        skip(self),
        fields(
            cities = self.city_count,
            ports = self.ports.len(),
            highways = self.highways.len()
        ),
    )]
    pub fn build(self) -> Result<Network> {
        let city_count = self.city_count;
        if city_count == 0 {
            return Err(PlanError::EmptyNetwork);
        }

        let mut cities: Vec<City> = reserve_per_city(city_count)?;
        cities.extend((0..city_count).map(|index| City {
            id: CityId::from_index(index),
            port_cost: 0,
        }));
        for (city, cost) in self.ports {
            check_city(city, city_count)?;
            if let Some(slot) = cities.get_mut(CityId::new(city).index()) {
                slot.port_cost = cost;
            }
        }

        let mut adjacency: Vec<Vec<HighwayId>> = reserve_per_city(city_count)?;
        adjacency.resize_with(city_count, Vec::new);
        let mut highways = Vec::with_capacity(self.highways.len());
        for (position, (first, second, cost)) in self.highways.into_iter().enumerate() {
            check_city(first, city_count)?;
            check_city(second, city_count)?;
            let highway = Highway {
                id: HighwayId::new(position),
                first: CityId::new(first),
                second: CityId::new(second),
                cost,
            };
            link(&mut adjacency, highway.first, highway.id);
            if !highway.is_loop() {
                link(&mut adjacency, highway.second, highway.id);
            }
            highways.push(highway);
        }

        let network = Network {
            cities,
            highways,
            adjacency,
        };
        debug!(ports_built = network.ports_built(), "network validated");
        if enabled!(Level::TRACE) {
            network.trace_contents();
        }
        Ok(network)
    }
}

/// Reserves room for one `T` per city without aborting on huge counts.
pub(crate) fn reserve_per_city<T>(city_count: usize) -> Result<Vec<T>> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(city_count)
        .map_err(|_| PlanError::NetworkTooLarge { city_count })?;
    Ok(slots)
}

fn link(adjacency: &mut [Vec<HighwayId>], city: CityId, highway: HighwayId) {
    if let Some(list) = adjacency.get_mut(city.index()) {
        list.push(highway);
    }
}

pub(crate) fn check_city(city: usize, city_count: usize) -> Result<()> {
    if city == 0 || city > city_count {
        return Err(PlanError::CityOutOfRange { city, city_count });
    }
    Ok(())
}
