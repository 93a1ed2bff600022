//! Concurrency building blocks for the traversals.
//!
//! Everything here is sized once per traversal call and dropped at its end:
//! - [`atomic`]: word-packed atomic bitsets backing the visited set
//! - `sync`: the level barrier of the wavefront BFS
//! - `worklist`: the lock-free pending pool of the parallel DFS

pub mod atomic;
pub(crate) mod sync;
pub(crate) mod worklist;
