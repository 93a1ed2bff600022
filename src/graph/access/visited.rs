//! The shared visited set of a traversal.
//!
//! One bit per vertex in a word-packed [`AtomicBitset`]. The only concurrent
//! operation is [`VisitedSet::try_claim`], a single atomic test-and-set; every
//! traversal inserts a vertex into its frontier or pool only after winning that
//! claim, so no vertex is ever enqueued twice.

use core::sync::atomic::Ordering;

use crate::concurrency::atomic::AtomicBitset;
use crate::VertexId;

/// Per-vertex visited flags with an exclusive atomic claim.
///
/// Claims take `&self` and may race freely. [`reset`](Self::reset) takes
/// `&mut self`, so it cannot run while any worker still holds a reference.
pub struct VisitedSet {
    bits: AtomicBitset,
}

impl VisitedSet {
    /// Creates a visited set for `vertex_count` vertices, all unvisited.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            bits: AtomicBitset::new(vertex_count),
        }
    }

    /// Starts a new claim cycle for `vertex_count` vertices.
    ///
    /// Reuses the allocation when the size is unchanged.
    pub fn reset(&mut self, vertex_count: usize) {
        if self.bits.len_bits() == vertex_count {
            self.bits.clear_all();
        } else {
            self.bits = AtomicBitset::new(vertex_count);
        }
    }

    /// Number of vertices covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len_bits()
    }

    /// `true` if the set covers no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Marks `v` visited. Returns `true` iff this call was the first to do so in
    /// the current cycle.
    ///
    /// # Panics
    /// Panics if `v >= len()`.
    #[inline]
    pub fn try_claim(&self, v: VertexId) -> bool {
        // The RMW alone gives exclusivity; vertex ids reach other workers
        // through the barrier or the pool CAS, which carry their own ordering.
        self.bits.test_and_set(v, Ordering::Relaxed)
    }

    /// Whether `v` has been claimed.
    ///
    /// # Panics
    /// Panics if `v >= len()`.
    #[inline]
    pub fn is_visited(&self, v: VertexId) -> bool {
        self.bits.is_set(v)
    }

    /// Number of claimed vertices.
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }
}

impl std::fmt::Debug for VisitedSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisitedSet")
            .field("len", &self.len())
            .field("claimed", &self.count())
            .finish()
    }
}
