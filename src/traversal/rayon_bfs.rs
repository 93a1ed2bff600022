//! Wavefront BFS on a caller-provided rayon pool.
//!
//! Same claim-before-insert rule as the scoped-thread version; the join of
//! each `par_chunks` pass is the level barrier.

use rayon::prelude::*;

use super::BfsOutcome;
use crate::error::Result;
use crate::graph::{Graph, VisitedSet};
use crate::VertexId;

impl Graph {
    /// Breadth-first traversal whose levels are expanded on `pool`.
    ///
    /// Each level is split into one chunk per pool thread; every chunk claims
    /// into its own buffer and the buffers are concatenated once all chunks
    /// have finished.
    ///
    /// # Errors
    /// [`TraversalError::InvalidVertex`](crate::TraversalError::InvalidVertex) if `start` is out of range.
    #[tracing::instrument(level = "debug", skip(self, pool), fields(threads = pool.current_num_threads()))]
    pub fn bfs_on_pool(&self, pool: &rayon::ThreadPool, start: VertexId) -> Result<BfsOutcome> {
        self.check(start)?;
        let visited = VisitedSet::new(self.vertex_count());
        let claimed = visited.try_claim(start);
        debug_assert!(claimed, "fresh visited set");

        let threads = pool.current_num_threads().max(1);
        let mut levels = vec![vec![start]];
        loop {
            let next = {
                let frontier = levels.last().map_or(&[][..], Vec::as_slice);
                let chunk = frontier.len().div_ceil(threads).max(1);
                pool.install(|| {
                    frontier
                        .par_chunks(chunk)
                        .map(|part| {
                            let mut local = Vec::new();
                            for &u in part {
                                for &v in self.adjacent(u) {
                                    if visited.try_claim(v) {
                                        local.push(v);
                                    }
                                }
                            }
                            local
                        })
                        .collect::<Vec<Vec<VertexId>>>()
                        .concat()
                })
            };
            if next.is_empty() {
                break;
            }
            levels.push(next);
        }

        let outcome = BfsOutcome::new(self.vertex_count(), levels);
        tracing::debug!(visited = outcome.visited_count(), depth = outcome.depth(), "bfs finished");
        Ok(outcome)
    }
}
