//! Property-based tests for highway selection.
//!
//! Cross-checks Kruskal against Borůvka and against two independent oracles
//! (a sequential Kruskal over plain vectors and an exhaustive search for
//! tiny networks), then validates structural invariants, idempotence and
//! monotonicity over generated networks.

mod oracle;
mod strategies;
mod structural;
mod types;
