//! Per-traversal state layered over the immutable graph store.

pub mod visited;

pub use visited::VisitedSet;
