//! Error type shared by graph construction, traversal, and the harness.

use crate::VertexId;

/// Errors raised before any traversal worker starts.
///
/// Reusing visited state across overlapping traversals is not represented here:
/// every traversal allocates its own [`VisitedSet`](crate::VisitedSet), and
/// [`VisitedSet::reset`](crate::VisitedSet::reset) takes `&mut self`, so the
/// misuse cannot be expressed in safe code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraversalError {
    /// A size or count parameter was not positive.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A vertex id fell outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidVertex {
        /// The offending id.
        vertex: VertexId,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

impl TraversalError {
    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TraversalError>;
