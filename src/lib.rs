//! hopgraph — in-memory undirected graph with classic traversals.
//!
//! Vertices are built by the caller, registered with a [`Graph`], joined by
//! unweighted edges, then walked depth-first, breadth-first, or searched
//! for the shortest hop count between two vertices.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Graph, GraphBuilder, TraversalParams, TraversalResult};
pub use types::{GraphError, GraphResult, Vertex, VertexId, DEFAULT_TRAVERSAL_MAX_RESULTS};
