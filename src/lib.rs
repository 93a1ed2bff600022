//! # `wavefront` - Parallel Graph Traversal
//!
//! Breadth-first and depth-first reachability over an immutable, shared-memory
//! graph, each available as a serial reference and as a fixed-size pool of
//! parallel workers. Whatever the worker count or interleaving, every reachable
//! vertex is processed exactly once and both strategies reach the same set.
//!
//! ## Exactly-once Guarantee
//!
//! All traversals share one rule: a vertex is inserted into a frontier or work
//! pool only by the worker that wins its **claim**, a single atomic
//! test-and-set on the vertex's bit in the [`VisitedSet`]. There is no separate
//! "check visited, then push" step for another worker to slip between.
//!
//! ## Architecture
//!
//! 1. **Graph store** ([`Graph`]):
//!    - Symmetric CSR (`offsets` + `targets`), built once
//!    - Read concurrently by all workers with no synchronization
//!
//! 2. **Visited set** ([`VisitedSet`]):
//!    - Word-packed atomic bitset, one bit per vertex
//!    - `try_claim` returns `true` to exactly one caller per vertex
//!    - `reset` takes `&mut self`, so it can never overlap with claims
//!
//! 3. **Wavefront BFS** ([`Graph::bfs`] with [`Mode::Parallel`]):
//!    - Each level is split into contiguous chunks, one per worker
//!    - Winners go to worker-local buffers, merged by the leader at a barrier
//!    - Level `k` is exactly the set of vertices at distance `k`
//!
//! 4. **Work-pool DFS** ([`Graph::dfs`] with [`Mode::Parallel`]):
//!    - Shared lock-free stack; each pop and each push batch is one CAS
//!    - An outstanding-work counter separates "empty for now" from "done"
//!
//! Each traversal call allocates its own visited set and frontier or pool, so
//! repeated or concurrent calls on the same graph never share mutable state.
//!
//! ## Example
//!
//! ```rust
//! use wavefront::{Graph, Mode};
//!
//! // 0 - 1 - 2, and 3 on its own
//! let graph = Graph::build(4, &[(0, 1), (1, 2)])?;
//!
//! assert_eq!(graph.traverse_bfs(0, Mode::Parallel, 4)?, 3);
//! assert_eq!(graph.traverse_dfs(0, Mode::Serial, 1)?, 3);
//! # Ok::<(), wavefront::TraversalError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod concurrency;
pub mod config;
pub mod error;
pub mod graph;
pub mod harness;
pub mod traversal;

/// Vertex identifier: an index in `0..vertex_count`.
pub type VertexId = usize;

pub use config::{default_workers, Mode, TraversalConfig};
pub use error::{Result, TraversalError};
pub use graph::{generate::random_graph, Graph, VisitedSet};
pub use harness::{measure, HarnessConfig, Report, Timing};
pub use traversal::{BfsOutcome, DfsOutcome};
