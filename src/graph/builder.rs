//! Fluent API for building Graph instances.

use crate::types::{GraphResult, Vertex, VertexId};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
pub struct GraphBuilder<T> {
    vertices: Vec<Vertex<T>>,
    edges: Vec<(VertexId, VertexId)>,
}

impl<T> GraphBuilder<T> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a vertex holding `value`, returning its handle.
    pub fn add_vertex(&mut self, value: T) -> VertexId {
        let vertex = Vertex::new(value);
        let id = vertex.id();
        self.vertices.push(vertex);
        id
    }

    /// Add an edge between two vertices.
    pub fn link(&mut self, v1: VertexId, v2: VertexId) -> &mut Self {
        self.edges.push((v1, v2));
        self
    }

    /// Link consecutive vertices: `path(&[a, b, c])` adds a–b and b–c.
    pub fn path(&mut self, ids: &[VertexId]) -> &mut Self {
        for pair in ids.windows(2) {
            if let [v1, v2] = *pair {
                self.edges.push((v1, v2));
            }
        }
        self
    }

    /// Build the final Graph. Fails if a link names a vertex never added.
    pub fn build(self) -> GraphResult<Graph<T>> {
        let mut graph = Graph::with_capacity(self.vertices.len());
        graph.add_vertices(self.vertices);
        for (v1, v2) in self.edges {
            graph.add_edge(v1, v2)?;
        }
        Ok(graph)
    }
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
