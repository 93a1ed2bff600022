//! Parallel DFS over a shared lock-free work pool.
//!
//! Workers pop a vertex, claim each neighbour, push the winners back as one
//! batch and then mark the popped vertex complete. An empty pop only ends a
//! worker once the pool reports itself drained, i.e. no vertex is pooled and
//! no other worker is still expanding one.

use crossbeam_utils::Backoff;

use super::{effective_workers, DfsOutcome};
use crate::concurrency::worklist::WorkPool;
use crate::graph::{Graph, VisitedSet};
use crate::VertexId;

pub(crate) fn work_pool(graph: &Graph, start: VertexId, workers: usize) -> DfsOutcome {
    let workers = effective_workers(workers, graph.vertex_count());
    let visited = VisitedSet::new(graph.vertex_count());
    let pool = WorkPool::new(graph.vertex_count());
    debug_assert_eq!(pool.capacity(), visited.len());

    let claimed = visited.try_claim(start);
    debug_assert!(claimed, "fresh visited set");
    pool.push(start);

    let per_worker: Vec<Vec<VertexId>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|tid| {
                let (visited, pool) = (&visited, &pool);
                scope.spawn(move || {
                    let mut order = Vec::new();
                    let mut batch = Vec::new();
                    let backoff = Backoff::new();
                    loop {
                        let Some(u) = pool.pop() else {
                            if pool.is_drained() {
                                break;
                            }
                            backoff.snooze();
                            continue;
                        };
                        backoff.reset();
                        order.push(u);
                        // Batch head is popped first, so adjacency order is kept.
                        for &v in graph.adjacent(u) {
                            if visited.try_claim(v) {
                                batch.push(v);
                            }
                        }
                        pool.push_batch(&batch);
                        batch.clear();
                        pool.complete();
                    }
                    tracing::trace!(worker = tid, expanded = order.len(), "dfs worker finished");
                    order
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    });

    debug_assert!(pool.is_drained() && pool.pop().is_none());
    let expanded_per_worker = per_worker.iter().map(Vec::len).collect();
    let order = per_worker.concat();
    DfsOutcome::new(graph.vertex_count(), order, expanded_per_worker)
}
