//! Core graph structure — an insertion-ordered arena of vertices.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::types::{GraphError, GraphResult, Vertex, VertexId};

use super::traversal::{self, TraversalParams, TraversalResult};

/// Undirected, unweighted graph over caller-constructed vertices.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// All vertices, keyed by id, in insertion order.
    nodes: IndexMap<VertexId, Vertex<T>>,
}

impl<T> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
        }
    }

    /// Create an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: IndexMap::with_capacity(capacity),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges between members. A self-loop counts as
    /// one edge.
    pub fn edge_count(&self) -> usize {
        let pairs: HashSet<(VertexId, VertexId)> = self
            .nodes
            .values()
            .flat_map(|v| {
                let id = v.id();
                self.member_adjacent(v)
                    .map(move |n| (id.min(n), id.max(n)))
            })
            .collect();
        pairs.len()
    }

    /// True when the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` is a member of this graph.
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Get a vertex by id.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.nodes.get(&id)
    }

    /// Get a vertex's value by id.
    pub fn value(&self, id: VertexId) -> Option<&T> {
        self.nodes.get(&id).map(|v| &v.value)
    }

    /// Get a vertex's value by id (mutable).
    pub fn value_mut(&mut self, id: VertexId) -> Option<&mut T> {
        self.nodes.get_mut(&id).map(|v| &mut v.value)
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> + '_ {
        self.nodes.values()
    }

    /// Member neighbor ids of `id` in insertion order.
    pub fn neighbors(&self, id: VertexId) -> GraphResult<impl Iterator<Item = VertexId> + '_> {
        Ok(self.member_adjacent(self.require(id)?))
    }

    /// Number of member neighbors of `id`.
    pub fn degree(&self, id: VertexId) -> GraphResult<usize> {
        Ok(self.member_adjacent(self.require(id)?).count())
    }

    /// Whether an edge joins members `v1` and `v2`.
    pub fn has_edge(&self, v1: VertexId, v2: VertexId) -> bool {
        match (self.nodes.get(&v1), self.nodes.get(&v2)) {
            (Some(a), Some(b)) => a.is_adjacent(v2) || b.is_adjacent(v1),
            _ => false,
        }
    }

    /// Add a vertex. Adding a vertex that is already present is a no-op.
    pub fn add_vertex(&mut self, vertex: Vertex<T>) {
        self.nodes.entry(vertex.id()).or_insert(vertex);
    }

    /// Add each vertex in order.
    pub fn add_vertices<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = Vertex<T>>,
    {
        for vertex in vertices {
            self.add_vertex(vertex);
        }
    }

    /// Connect `v1` and `v2`. Idempotent; self-loops are allowed.
    pub fn add_edge(&mut self, v1: VertexId, v2: VertexId) -> GraphResult<()> {
        self.require_both(v1, v2)?;
        if let Some(v) = self.nodes.get_mut(&v1) {
            v.link(v2);
        }
        if let Some(v) = self.nodes.get_mut(&v2) {
            v.link(v1);
        }
        log::trace!("linked {} <-> {}", v1, v2);
        Ok(())
    }

    /// Disconnect `v1` and `v2`. Removing a missing edge is a no-op.
    pub fn remove_edge(&mut self, v1: VertexId, v2: VertexId) -> GraphResult<()> {
        self.require_both(v1, v2)?;
        self.unlink(v1, v2);
        log::trace!("unlinked {} <-> {}", v1, v2);
        Ok(())
    }

    /// Remove a vertex and every edge touching it, returning the record.
    pub fn remove_vertex(&mut self, id: VertexId) -> GraphResult<Vertex<T>> {
        let mut removed = self
            .nodes
            .shift_remove(&id)
            .ok_or(GraphError::VertexNotFound(id))?;
        // Snapshot: unlink() mutates the set being walked.
        let neighbors: Vec<VertexId> = removed.adjacent().collect();
        for &neighbor in &neighbors {
            removed.unlink(neighbor);
        }
        // Sweep every member: entries from Vertex::with_adjacent may be one-way.
        for vertex in self.nodes.values_mut() {
            vertex.unlink(id);
        }
        log::debug!("removed vertex {} and {} edge(s)", id, neighbors.len());
        Ok(removed)
    }

    /// Values reachable from `start`, in depth-first visit order.
    pub fn depth_first_search(&self, start: VertexId) -> GraphResult<Vec<&T>> {
        traversal::depth_first(self, start)
    }

    /// Values reachable from `start`, in breadth-first order.
    pub fn breadth_first_search(&self, start: VertexId) -> GraphResult<Vec<&T>> {
        traversal::breadth_first(self, start)
    }

    /// Hop count of the shortest path, or `None` if `end` is unreachable.
    pub fn distance_of_shortest_path(
        &self,
        start: VertexId,
        end: VertexId,
    ) -> GraphResult<Option<usize>> {
        traversal::shortest_distance(self, start, end)
    }

    /// Vertices along one shortest path from `start` to `end`, both included.
    pub fn shortest_path(
        &self,
        start: VertexId,
        end: VertexId,
    ) -> GraphResult<Option<Vec<VertexId>>> {
        traversal::shortest_path(self, start, end)
    }

    /// Bounded breadth-first traversal.
    pub fn traverse(&self, params: TraversalParams) -> GraphResult<TraversalResult> {
        traversal::bfs_traverse(self, params)
    }

    /// Look up a member vertex or fail with `VertexNotFound`.
    pub(crate) fn require(&self, id: VertexId) -> GraphResult<&Vertex<T>> {
        self.nodes.get(&id).ok_or(GraphError::VertexNotFound(id))
    }

    /// Adjacency entries of `vertex` that are members of this graph.
    fn member_adjacent<'g>(
        &'g self,
        vertex: &'g Vertex<T>,
    ) -> impl Iterator<Item = VertexId> + 'g {
        vertex
            .adjacent()
            .filter(move |n| self.nodes.contains_key(n))
    }

    fn require_both(&self, v1: VertexId, v2: VertexId) -> GraphResult<()> {
        self.require(v1)?;
        self.require(v2)?;
        Ok(())
    }

    fn unlink(&mut self, v1: VertexId, v2: VertexId) {
        if let Some(v) = self.nodes.get_mut(&v1) {
            v.unlink(v2);
        }
        if let Some(v) = self.nodes.get_mut(&v2) {
            v.unlink(v1);
        }
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
