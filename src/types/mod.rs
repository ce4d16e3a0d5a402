//! All data types for the hopgraph library.

pub mod error;
pub mod vertex;

pub use error::{GraphError, GraphResult};
pub use vertex::{Vertex, VertexId};

/// Default cap on the number of vertices a bounded traversal returns.
pub const DEFAULT_TRAVERSAL_MAX_RESULTS: usize = 10_000;
