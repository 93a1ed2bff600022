//! Seeded random graph construction for benchmarks and tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, TraversalError};
use crate::graph::Graph;

/// Builds a random undirected graph.
///
/// For every vertex `i`, `attempts_per_vertex` neighbours are drawn uniformly
/// from `[0, vertex_count)`; draws equal to `i` are dropped, so the graph has no
/// self-loops. Duplicate edges are kept. The same `seed` always yields the same
/// graph.
///
/// # Errors
/// [`TraversalError::InvalidInput`] if `vertex_count == 0`.
pub fn random_graph(vertex_count: usize, attempts_per_vertex: usize, seed: u64) -> Result<Graph> {
    if vertex_count == 0 {
        return Err(TraversalError::invalid_input("vertex count must be positive"));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(vertex_count * attempts_per_vertex);
    for i in 0..vertex_count {
        for _ in 0..attempts_per_vertex {
            let j = rng.gen_range(0..vertex_count);
            if j != i {
                edges.push((i, j));
            }
        }
    }
    tracing::debug!(vertex_count, edges = edges.len(), seed, "generated random graph");
    Graph::from_edges(vertex_count, edges)
}
