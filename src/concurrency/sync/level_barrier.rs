//! `LevelBarrier`: the rendezvous between BFS levels.

use std::sync::Barrier;

/// A reusable barrier for a fixed number of workers that elects one leader per
/// generation.
///
/// The leader is the worker allowed to publish the merged next frontier; all
/// other workers only read it after the following `wait`.
pub(crate) struct LevelBarrier {
    inner: Barrier,
    workers: usize,
}

impl LevelBarrier {
    /// Creates a barrier for `workers` participants.
    pub(crate) fn new(workers: usize) -> Self {
        Self {
            inner: Barrier::new(workers),
            workers,
        }
    }

    /// Number of participants.
    pub(crate) fn workers(&self) -> usize {
        self.workers
    }

    /// Blocks until all workers have arrived. Returns `true` for exactly one of them.
    pub(crate) fn wait(&self) -> bool {
        self.inner.wait().is_leader()
    }
}
