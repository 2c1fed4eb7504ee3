//! Benchmark support crate for portplan.
//!
//! Provides seeded synthetic networks and parameter types used by the
//! Criterion benchmarks comparing the highway selection strategies.

pub mod error;
pub mod params;
pub mod source;
