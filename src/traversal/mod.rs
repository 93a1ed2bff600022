//! BFS and DFS over a [`Graph`], serial or parallel.
//!
//! Every call allocates its own [`VisitedSet`](crate::VisitedSet) and
//! frontier/pool; nothing is shared between calls except the read-only graph.
//! All validation happens before any worker is spawned.

mod bfs;
mod dfs;
#[cfg(feature = "rayon")]
mod rayon_bfs;
mod serial;

use crate::config::{Mode, TraversalConfig};
use crate::error::Result;
use crate::graph::Graph;
use crate::VertexId;

/// Result of a breadth-first traversal: the vertices of each level.
///
/// `levels()[k]` holds exactly the vertices at graph distance `k` from the
/// start. Order inside a level is unspecified for parallel runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsOutcome {
    vertex_count: usize,
    levels: Vec<Vec<VertexId>>,
}

impl BfsOutcome {
    pub(crate) fn new(vertex_count: usize, levels: Vec<Vec<VertexId>>) -> Self {
        Self {
            vertex_count,
            levels,
        }
    }

    /// Number of vertices reached, the start included.
    pub fn visited_count(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    /// Number of levels (eccentricity of the start within its component, plus one).
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// All levels, level 0 first.
    pub fn levels(&self) -> &[Vec<VertexId>] {
        &self.levels
    }

    /// The vertices at distance `k`, if any were reached.
    pub fn level(&self, k: usize) -> Option<&[VertexId]> {
        self.levels.get(k).map(Vec::as_slice)
    }

    /// Iterates every reached vertex, level by level.
    pub fn visited(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.levels.iter().flatten().copied()
    }

    /// Distance of each vertex from the start, `None` when unreachable.
    pub fn distances(&self) -> Vec<Option<usize>> {
        let mut out = vec![None; self.vertex_count];
        for (k, level) in self.levels.iter().enumerate() {
            for &v in level {
                out[v] = Some(k);
            }
        }
        out
    }

    /// Levels with each level sorted, for order-insensitive comparison.
    pub fn sorted_levels(&self) -> Vec<Vec<VertexId>> {
        self.levels
            .iter()
            .map(|l| {
                let mut l = l.clone();
                l.sort_unstable();
                l
            })
            .collect()
    }

    /// Consumes the outcome, returning the levels.
    pub fn into_levels(self) -> Vec<Vec<VertexId>> {
        self.levels
    }
}

/// Result of a depth-first traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsOutcome {
    vertex_count: usize,
    order: Vec<VertexId>,
    expanded_per_worker: Vec<usize>,
}

impl DfsOutcome {
    pub(crate) fn new(
        vertex_count: usize,
        order: Vec<VertexId>,
        expanded_per_worker: Vec<usize>,
    ) -> Self {
        Self {
            vertex_count,
            order,
            expanded_per_worker,
        }
    }

    /// Number of vertices reached, the start included.
    pub fn visited_count(&self) -> usize {
        self.order.len()
    }

    /// Expansion order. For serial runs this is the DFS preorder; for parallel
    /// runs it is each worker's local order, concatenated by worker.
    pub fn order(&self) -> &[VertexId] {
        &self.order
    }

    /// `mask[v]` is `true` iff `v` was reached.
    pub fn visited_mask(&self) -> Vec<bool> {
        let mut mask = vec![false; self.vertex_count];
        for &v in &self.order {
            mask[v] = true;
        }
        mask
    }

    /// How many vertices each worker expanded (a single entry for serial runs).
    pub fn expanded_per_worker(&self) -> &[usize] {
        &self.expanded_per_worker
    }
}

impl Graph {
    /// Breadth-first traversal from `start`.
    ///
    /// # Errors
    /// - [`TraversalError::InvalidInput`](crate::TraversalError::InvalidInput) if `config.workers == 0`
    /// - [`TraversalError::InvalidVertex`](crate::TraversalError::InvalidVertex) if `start` is out of range
    #[tracing::instrument(level = "debug", skip(self), fields(vertices = self.vertex_count()))]
    pub fn bfs(&self, start: VertexId, config: &TraversalConfig) -> Result<BfsOutcome> {
        config.validate()?;
        self.check(start)?;
        let outcome = match config.mode {
            Mode::Serial => serial::bfs(self, start),
            Mode::Parallel => bfs::wavefront(self, start, config.workers),
        };
        tracing::debug!(
            visited = outcome.visited_count(),
            depth = outcome.depth(),
            "bfs finished"
        );
        Ok(outcome)
    }

    /// Depth-first traversal from `start`.
    ///
    /// # Errors
    /// Same as [`bfs`](Self::bfs).
    #[tracing::instrument(level = "debug", skip(self), fields(vertices = self.vertex_count()))]
    pub fn dfs(&self, start: VertexId, config: &TraversalConfig) -> Result<DfsOutcome> {
        config.validate()?;
        self.check(start)?;
        let outcome = match config.mode {
            Mode::Serial => serial::dfs(self, start),
            Mode::Parallel => dfs::work_pool(self, start, config.workers),
        };
        tracing::debug!(visited = outcome.visited_count(), "dfs finished");
        Ok(outcome)
    }

    /// Number of vertices reachable from `start`, explored breadth-first.
    ///
    /// # Errors
    /// Same as [`bfs`](Self::bfs).
    pub fn traverse_bfs(&self, start: VertexId, mode: Mode, workers: usize) -> Result<usize> {
        self.bfs(start, &TraversalConfig::new(mode, workers))
            .map(|o| o.visited_count())
    }

    /// Number of vertices reachable from `start`, explored depth-first.
    ///
    /// # Errors
    /// Same as [`bfs`](Self::bfs).
    pub fn traverse_dfs(&self, start: VertexId, mode: Mode, workers: usize) -> Result<usize> {
        self.dfs(start, &TraversalConfig::new(mode, workers))
            .map(|o| o.visited_count())
    }
}

/// Parallel workers beyond the vertex count could never receive work.
#[inline]
pub(crate) fn effective_workers(requested: usize, vertex_count: usize) -> usize {
    requested.min(vertex_count).max(1)
}

#[cfg(test)]
mod tests;
