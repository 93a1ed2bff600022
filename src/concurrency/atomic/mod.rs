//! Atomic primitives used by the visited set and the work pool.
//!
//! Under `--cfg loom` the std atomics are swapped for `loom`'s so the claim
//! protocol can be model-checked (see `tests/loom_visited.rs`).

/// Word-packed atomic bitsets.
pub mod bitset;

pub use bitset::AtomicBitset;

#[cfg(loom)]
pub(crate) use loom::sync::atomic::AtomicUsize;

#[cfg(not(loom))]
pub(crate) use std::sync::atomic::AtomicUsize;
