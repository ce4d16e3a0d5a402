//! Error types for the hopgraph library.

use thiserror::Error;

use super::VertexId;

/// All errors that can occur in the hopgraph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex is not a member of the graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
