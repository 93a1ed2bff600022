//! Graph storage and per-traversal access state.
//!
//! - `csr_graph`: the immutable CSR store shared by all workers
//! - [`access`]: the visited set each traversal allocates for itself
//! - [`generate`]: seeded random graphs

pub mod access;
mod csr_graph;
pub mod generate;

pub use access::VisitedSet;
pub use csr_graph::Graph;
