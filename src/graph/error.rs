//! Errors raised by graph representations.

use super::{VertexId, Weight};

/// Errors that can occur while building or querying a graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A vertex id lies outside `[0, vertex_count)`.
    #[error("Vertex {vertex} is out of bounds for a graph with {vertex_count} vertices")]
    OutOfBounds {
        /// The offending vertex id
        vertex: VertexId,
        /// Number of vertices in the graph
        vertex_count: usize,
    },

    /// The weight violates the representation's weight rule.
    #[error("Invalid edge weight {weight}: {reason}")]
    InvalidWeight {
        /// The rejected weight
        weight: Weight,
        /// Which rule the weight broke
        reason: &'static str,
    },

    /// The adjacency-set representation does not store self-loops.
    #[error("Vertex {vertex} can not be adjacent to itself")]
    SelfLoopRejected {
        /// The vertex the loop was requested on
        vertex: VertexId,
    },
}

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
