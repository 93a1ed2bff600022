//! The immutable CSR (compressed sparse row) graph store.
//!
//! Memory layout:
//! - `offsets`: `Vec<usize>` of length `n + 1` (row offsets)
//! - `targets`: contiguous neighbour ids, row by row, in insertion order
//!
//! The graph is built once and never mutated afterwards, so any number of
//! traversal workers read it concurrently without synchronization.

use crate::error::{Result, TraversalError};
use crate::VertexId;

/// An undirected graph stored as symmetric CSR.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `build` / `from_edges` | \(O(n + m)\) | Counting pass, then a placement pass |
/// | `neighbors` | \(O(1)\) | Returns a slice into `targets` |
/// | `degree` | \(O(1)\) | Difference of two offsets |
/// | `has_edge` | \(O(\text{degree})\) | Linear scan of the row |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    offsets: Vec<usize>,
    targets: Vec<VertexId>,
}

impl Graph {
    /// Builds an undirected graph from an edge list.
    ///
    /// Each `(u, v)` is recorded in both `u`'s and `v`'s neighbour lists, in the
    /// order the edges are given. A self-loop `(v, v)` appears twice in `v`'s
    /// list.
    ///
    /// # Errors
    /// - [`TraversalError::InvalidInput`] if `vertex_count == 0`
    /// - [`TraversalError::InvalidVertex`] if an endpoint is `>= vertex_count`
    pub fn build(vertex_count: usize, edges: &[(VertexId, VertexId)]) -> Result<Self> {
        Self::from_edges(vertex_count, edges.iter().copied())
    }

    /// Like [`build`](Self::build), for any edge iterator.
    ///
    /// # Errors
    /// See [`build`](Self::build).
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        if vertex_count == 0 {
            return Err(TraversalError::invalid_input("vertex count must be positive"));
        }
        let edges: Vec<(VertexId, VertexId)> = edges.into_iter().collect();

        let mut degree = vec![0usize; vertex_count];
        for &(u, v) in &edges {
            check_vertex(u, vertex_count)?;
            check_vertex(v, vertex_count)?;
            degree[u] += 1;
            degree[v] += 1;
        }

        let mut offsets = Vec::with_capacity(vertex_count + 1);
        offsets.push(0);
        let mut total = 0usize;
        for d in &degree {
            total += d;
            offsets.push(total);
        }

        // Second pass places each endpoint at its row cursor, preserving edge order.
        let mut cursor = offsets[..vertex_count].to_vec();
        let mut targets = vec![0; total];
        for (u, v) in edges {
            targets[cursor[u]] = v;
            cursor[u] += 1;
            targets[cursor[v]] = u;
            cursor[v] += 1;
        }

        Ok(Self { offsets, targets })
    }

    /// Builds a graph from per-vertex neighbour lists, taken verbatim.
    ///
    /// No symmetry is enforced; pass symmetric lists for undirected traversal.
    ///
    /// # Errors
    /// - [`TraversalError::InvalidInput`] if `adjacency` is empty
    /// - [`TraversalError::InvalidVertex`] if a neighbour is out of range
    pub fn from_adjacency(adjacency: &[Vec<VertexId>]) -> Result<Self> {
        let n = adjacency.len();
        if n == 0 {
            return Err(TraversalError::invalid_input("vertex count must be positive"));
        }

        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0);
        let mut total = 0usize;
        for nbrs in adjacency {
            total += nbrs.len();
            offsets.push(total);
        }

        let mut targets = Vec::with_capacity(total);
        for nbrs in adjacency {
            for &v in nbrs {
                check_vertex(v, n)?;
                targets.push(v);
            }
        }

        Ok(Self { offsets, targets })
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of undirected edges (half the adjacency entries).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.targets.len() / 2
    }

    /// Whether `v` is a vertex of this graph.
    #[inline]
    pub fn contains(&self, v: VertexId) -> bool {
        v < self.vertex_count()
    }

    /// The neighbours of `v`, in insertion order.
    ///
    /// # Errors
    /// [`TraversalError::InvalidVertex`] if `v` is out of range.
    pub fn neighbors(&self, v: VertexId) -> Result<&[VertexId]> {
        self.check(v)?;
        Ok(self.adjacent(v))
    }

    /// Degree of `v` (a self-loop counts twice).
    ///
    /// # Errors
    /// [`TraversalError::InvalidVertex`] if `v` is out of range.
    pub fn degree(&self, v: VertexId) -> Result<usize> {
        self.check(v)?;
        Ok(self.offsets[v + 1] - self.offsets[v])
    }

    /// Whether `u` lists `v` as a neighbour.
    ///
    /// # Errors
    /// [`TraversalError::InvalidVertex`] if either id is out of range.
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> Result<bool> {
        self.check(v)?;
        Ok(self.neighbors(u)?.contains(&v))
    }

    /// Validates a vertex id against this graph.
    ///
    /// # Errors
    /// [`TraversalError::InvalidVertex`] if `v` is out of range.
    #[inline]
    pub fn check(&self, v: VertexId) -> Result<()> {
        check_vertex(v, self.vertex_count())
    }

    /// Row slice without the `Result` wrapper; `v` must already be validated.
    #[inline]
    pub(crate) fn adjacent(&self, v: VertexId) -> &[VertexId] {
        &self.targets[self.offsets[v]..self.offsets[v + 1]]
    }
}

#[inline]
fn check_vertex(vertex: VertexId, vertex_count: usize) -> Result<()> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(TraversalError::InvalidVertex {
            vertex,
            vertex_count,
        })
    }
}
