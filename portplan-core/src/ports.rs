//! Port-clique pre-linking.
//!
//! Every city with a non-zero port cost is reachable from every other port
//! city at no highway cost. Before the highway pass runs, the lowest-id port
//! city becomes the anchor and all other port cities are merged into its
//! component, so the MST selector only ever consults the disjoint set.

use tracing::{debug, instrument};

use crate::{
    disjoint_set::DisjointSet,
    error::{PlanError, Result},
    network::{CityId, Network},
};

/// Summary of the port clique merged into a [`DisjointSet`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PortClique {
    anchor: Option<CityId>,
    ports_built: usize,
    port_cost: u64,
}

impl PortClique {
    /// Merges every port city of `network` into one component of `set`.
    ///
    /// # Errors
    /// Returns [`PlanError::CostOverflow`] when the port costs do not fit in
    /// `u64`, and [`PlanError::CityOutOfRange`] when `set` tracks fewer
    /// cities than `network`.
    ///
    /// # Examples
    /// ```
    /// use portplan_core::{DisjointSet, NetworkBuilder, PortClique};
    ///
    /// let network = NetworkBuilder::new(4)
    ///     .with_port(2, 5)
    ///     .with_port(4, 7)
    ///     .build()?;
    /// let mut set = DisjointSet::new(network.city_count());
    /// let clique = PortClique::link(&network, &mut set)?;
    /// assert_eq!(clique.ports_built(), 2);
    /// assert_eq!(clique.port_cost(), 12);
    /// assert_eq!(clique.remaining_components(network.city_count()), 3);
    /// assert_eq!(set.component_count(), 3);
    /// # Ok::<(), portplan_core::PlanError>(())
    /// ```
    #[instrument(
        name = "core.link_ports",
        level = "debug",
        err,
        skip(network, set),
        fields(cities = network.city_count()),
    )]
    pub fn link(network: &Network, set: &mut DisjointSet) -> Result<Self> {
        let mut anchor = None;
        let mut ports_built = 0_usize;
        let mut port_cost = 0_u64;

        for city in network.port_cities() {
            port_cost = port_cost
                .checked_add(city.port_cost())
                .ok_or(PlanError::CostOverflow {
                    context: "port costs",
                })?;
            ports_built = ports_built.saturating_add(1);
            match anchor {
                None => anchor = Some(city.id()),
                Some(root) => {
                    set.union(root, city.id())?;
                }
            }
        }

        debug!(
            anchor = anchor.map(CityId::get),
            ports_built, port_cost, "port clique linked"
        );
        Ok(Self {
            anchor,
            ports_built,
            port_cost,
        })
    }

    /// Returns the city every other port city was merged into, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn anchor(&self) -> Option<CityId> { self.anchor }

    /// Returns the number of port cities.
    #[must_use]
    #[rustfmt::skip]
    pub const fn ports_built(&self) -> usize { self.ports_built }

    /// Returns the sum of all port costs.
    #[must_use]
    #[rustfmt::skip]
    pub const fn port_cost(&self) -> u64 { self.port_cost }

    /// Returns how many components still need highways once the clique has
    /// collapsed `ports_built` cities into one.
    #[must_use]
    pub const fn remaining_components(&self, city_count: usize) -> usize {
        if self.ports_built == 0 {
            city_count
        } else {
            city_count.saturating_sub(self.ports_built - 1)
        }
    }
}
