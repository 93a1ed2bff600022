//! The shared pending-vertex pool of the parallel DFS.
//!
//! An index-linked Treiber stack:
//! - `head` is an atomic index (or `NONE`)
//! - `next[i]` is the atomic next pointer for vertex `i`
//!
//! plus an `outstanding` counter that covers both pooled items and items a
//! worker has popped but not yet finished expanding. The pool is drained only
//! when `outstanding` reaches zero, which is what lets workers tell "empty for
//! now" apart from "done".
//!
//! Correctness relies on each index being pushed at most once per pool
//! lifetime. The traversal guarantees this by claiming a vertex in the visited
//! set before pushing it, so the stack never sees a popped index come back and
//! the CAS in `pop` cannot hit ABA.

use core::sync::atomic::{AtomicUsize, Ordering};

use crossbeam_utils::CachePadded;

/// Sentinel for an empty stack / null next pointer.
pub(crate) const NONE: usize = usize::MAX;

/// A lock-free LIFO pool of indices `0..capacity` with completion tracking.
pub(crate) struct WorkPool {
    head: CachePadded<AtomicUsize>,
    outstanding: CachePadded<AtomicUsize>,
    next: Box<[AtomicUsize]>,
}

impl WorkPool {
    /// Creates an empty pool for indices below `capacity`.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            head: CachePadded::new(AtomicUsize::new(NONE)),
            outstanding: CachePadded::new(AtomicUsize::new(0)),
            next: (0..capacity).map(|_| AtomicUsize::new(NONE)).collect(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.next.len()
    }

    /// Pushes a single index.
    #[inline]
    pub(crate) fn push(&self, idx: usize) {
        self.push_batch(&[idx]);
    }

    /// Pushes a batch of indices with a single successful CAS.
    ///
    /// The batch lands on top of the stack in the given order (`batch[0]` is
    /// popped first). The outstanding count is raised before the batch becomes
    /// visible, so a concurrent `is_drained` can never observe zero while the
    /// items are reachable.
    ///
    /// # Panics
    /// Panics if any index is `>= capacity()`.
    pub(crate) fn push_batch(&self, batch: &[usize]) {
        let (Some(&first), Some(&last)) = (batch.first(), batch.last()) else {
            return;
        };
        for &idx in batch {
            assert!(idx < self.next.len(), "index {idx} out of pool capacity");
        }

        self.outstanding.fetch_add(batch.len(), Ordering::AcqRel);

        // Link the batch once; only the tail link depends on the current head.
        for w in batch.windows(2) {
            self.next[w[0]].store(w[1], Ordering::Relaxed);
        }

        loop {
            let old = self.head.load(Ordering::Acquire);
            self.next[last].store(old, Ordering::Relaxed);
            if self
                .head
                .compare_exchange_weak(old, first, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                return;
            }
        }
    }

    /// Pops an index, if any. The caller must call [`complete`](Self::complete)
    /// once it has finished with the item (including pushing anything it
    /// discovered).
    #[inline]
    pub(crate) fn pop(&self) -> Option<usize> {
        loop {
            let h = self.head.load(Ordering::Acquire);
            if h == NONE {
                return None;
            }
            let n = self.next[h].load(Ordering::Relaxed);
            if self
                .head
                .compare_exchange_weak(h, n, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                return Some(h);
            }
        }
    }

    /// Marks one popped item as fully processed.
    #[inline]
    pub(crate) fn complete(&self) {
        let prev = self.outstanding.fetch_sub(1, Ordering::AcqRel);
        debug_assert!(prev != 0, "complete() without a matching pop");
    }

    /// `true` once every pushed item has been popped and completed.
    #[inline]
    pub(crate) fn is_drained(&self) -> bool {
        self.outstanding.load(Ordering::Acquire) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;

    #[test]
    fn lifo_order_and_batch_order() {
        let pool = WorkPool::new(8);
        assert_eq!(pool.capacity(), 8);
        assert!(pool.is_drained());

        pool.push(0);
        pool.push_batch(&[3, 4, 5]);
        assert!(!pool.is_drained());

        assert_eq!(pool.pop(), Some(3));
        assert_eq!(pool.pop(), Some(4));
        assert_eq!(pool.pop(), Some(5));
        assert_eq!(pool.pop(), Some(0));
        assert_eq!(pool.pop(), None);

        // Four items were popped but none completed yet.
        assert!(!pool.is_drained());
        for _ in 0..4 {
            pool.complete();
        }
        assert!(pool.is_drained());
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let pool = WorkPool::new(2);
        pool.push_batch(&[]);
        assert!(pool.is_drained());
        assert_eq!(pool.pop(), None);
    }

    #[test]
    #[should_panic(expected = "out of pool capacity")]
    fn push_beyond_capacity_panics() {
        let pool = WorkPool::new(2);
        pool.push(2);
    }

    #[test]
    fn concurrent_producers_and_consumers_see_each_index_once() {
        const N: usize = 10_000;
        const THREADS: usize = 4;
        let pool = WorkPool::new(N);
        let seen: Vec<AtomicBool> = (0..N).map(|_| AtomicBool::new(false)).collect();

        std::thread::scope(|s| {
            for t in 0..THREADS {
                let pool = &pool;
                s.spawn(move || {
                    let mine: Vec<usize> = (0..N).filter(|i| i % THREADS == t).collect();
                    for chunk in mine.chunks(17) {
                        pool.push_batch(chunk);
                    }
                });
            }
            for _ in 0..THREADS {
                s.spawn(|| loop {
                    match pool.pop() {
                        Some(i) => {
                            assert!(!seen[i].swap(true, Ordering::Relaxed), "index {i} popped twice");
                            pool.complete();
                        }
                        None if pool.is_drained() && seen.iter().all(|f| f.load(Ordering::Relaxed)) => break,
                        None => std::hint::spin_loop(),
                    }
                });
            }
        });

        assert!(pool.is_drained());
        assert!(seen.iter().all(|f| f.load(Ordering::Relaxed)));
    }
}
