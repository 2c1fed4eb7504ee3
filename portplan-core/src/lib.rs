//! Portplan core library.
//!
//! Computes the cheapest way to connect every city of a network, where cities
//! can be joined by highways or by building ports. All port cities are
//! mutually reachable at no highway cost; the remaining components are joined
//! by a minimum spanning forest over the highways.
//!
//! ```
//! use portplan_core::{NetworkBuilder, PlanOutcome, PlannerBuilder};
//!
//! let network = NetworkBuilder::new(4)
//!     .with_highway(1, 2, 1)
//!     .with_highway(2, 3, 2)
//!     .with_highway(3, 4, 3)
//!     .with_highway(1, 4, 10)
//!     .build()?;
//! match PlannerBuilder::new().build().plan(&network)? {
//!     PlanOutcome::Success(plan) => assert_eq!(plan.total_cost(), 6),
//!     PlanOutcome::Infeasible(_) => unreachable!("the path connects every city"),
//! }
//! # Ok::<(), portplan_core::PlanError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod error;
mod mst;
mod network;
mod plan;
mod planner;
mod ports;
#[cfg(test)]
mod test_utils;

pub use crate::{
    disjoint_set::DisjointSet,
    error::{PlanError, PlanErrorCode, PlanErrorKind, Result},
    mst::{MstStrategy, Selection, UnknownStrategy, select_highways},
    network::{City, CityId, Highway, HighwayId, Network, NetworkBuilder},
    plan::{BuildStatus, Infeasible, Plan, PlanAccumulator, PlanOutcome},
    planner::{Planner, PlannerBuilder},
    ports::PortClique,
};
