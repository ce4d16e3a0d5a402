//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod traversal;
pub mod undirected;

pub use builder::GraphBuilder;
pub use traversal::{TraversalParams, TraversalResult};
pub use undirected::Graph;
