//! Level-synchronous (wavefront) parallel BFS.
//!
//! A fixed pool of scoped workers lives for the whole call. Per level:
//!
//! 1. worker `t` expands the `t`-th contiguous chunk of the current frontier,
//!    claiming each neighbour in the shared [`VisitedSet`] and keeping the
//!    winners in a worker-local buffer;
//! 2. the buffer is parked in the worker's staging slot and everyone meets at
//!    the [`LevelBarrier`];
//! 3. the barrier leader concatenates the slots into the next level, or flags
//!    termination when they are all empty;
//! 4. a second rendezvous publishes that decision to every worker.
//!
//! Nothing is ever pushed to a shared queue, and the claim is the only
//! cross-worker operation during expansion.

use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError, RwLock};

use crossbeam_utils::CachePadded;

use super::{effective_workers, BfsOutcome};
use crate::concurrency::sync::LevelBarrier;
use crate::graph::{Graph, VisitedSet};
use crate::VertexId;

pub(crate) fn wavefront(graph: &Graph, start: VertexId, workers: usize) -> BfsOutcome {
    let workers = effective_workers(workers, graph.vertex_count());
    let visited = VisitedSet::new(graph.vertex_count());
    let claimed = visited.try_claim(start);
    debug_assert!(claimed, "fresh visited set");

    let levels = RwLock::new(vec![vec![start]]);
    let staged: Vec<CachePadded<Mutex<Vec<VertexId>>>> = (0..workers)
        .map(|_| CachePadded::new(Mutex::new(Vec::new())))
        .collect();
    let barrier = LevelBarrier::new(workers);
    let done = AtomicBool::new(false);

    std::thread::scope(|scope| {
        for tid in 0..workers {
            let (visited, levels, staged, barrier, done) =
                (&visited, &levels, &staged, &barrier, &done);
            scope.spawn(move || {
                let mut local = Vec::new();
                let mut expanded = 0usize;
                loop {
                    {
                        let levels = levels.read().unwrap_or_else(PoisonError::into_inner);
                        let frontier = levels.last().map_or(&[][..], Vec::as_slice);
                        let mine = &frontier[chunk(frontier.len(), barrier.workers(), tid)];
                        expanded += mine.len();
                        for &u in mine {
                            for &v in graph.adjacent(u) {
                                if visited.try_claim(v) {
                                    local.push(v);
                                }
                            }
                        }
                    }

                    // The slot was emptied by the leader last round; take it back as
                    // the next local buffer.
                    std::mem::swap(&mut *lock(&staged[tid]), &mut local);

                    if barrier.wait() {
                        let mut next = Vec::new();
                        for slot in staged {
                            next.append(&mut lock(slot));
                        }
                        if next.is_empty() {
                            done.store(true, Ordering::Relaxed);
                        } else {
                            let mut levels = levels.write().unwrap_or_else(PoisonError::into_inner);
                            tracing::trace!(level = levels.len(), frontier = next.len(), "level merged");
                            levels.push(next);
                        }
                    }
                    barrier.wait();

                    if done.load(Ordering::Relaxed) {
                        break;
                    }
                }
                tracing::trace!(worker = tid, expanded, "bfs worker finished");
            });
        }
    });

    let levels = levels.into_inner().unwrap_or_else(PoisonError::into_inner);
    BfsOutcome::new(graph.vertex_count(), levels)
}

/// The `tid`-th of `workers` contiguous chunks of `0..len`; empty when there is
/// nothing left for this worker.
pub(crate) fn chunk(len: usize, workers: usize, tid: usize) -> Range<usize> {
    let size = len.div_ceil(workers);
    let start = (tid * size).min(len);
    let end = (start + size).min(len);
    start..end
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}
