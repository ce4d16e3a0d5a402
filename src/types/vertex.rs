//! Vertex — a value plus the ids of its neighbors.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexSet;

static NEXT_VERTEX_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique handle identifying a vertex.
///
/// Handles are `Copy`, so callers keep one around after moving the
/// [`Vertex`] record into a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(u64);

impl VertexId {
    fn next() -> Self {
        Self(NEXT_VERTEX_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value of the handle.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A graph vertex: a caller-supplied value and its adjacency set.
///
/// Adjacency is only changed through [`crate::Graph`] edge operations,
/// which keep it symmetric. Clones share the original's identity.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    id: VertexId,
    /// Caller payload.
    pub value: T,
    adjacent: IndexSet<VertexId>,
}

impl<T> Vertex<T> {
    /// Create a vertex with no neighbors.
    pub fn new(value: T) -> Self {
        Self {
            id: VertexId::next(),
            value,
            adjacent: IndexSet::new(),
        }
    }

    /// Create a vertex with an initial neighbor set.
    ///
    /// The neighbors are recorded as given; nothing is added on their side.
    pub fn with_adjacent<I>(value: T, adjacent: I) -> Self
    where
        I: IntoIterator<Item = VertexId>,
    {
        Self {
            id: VertexId::next(),
            value,
            adjacent: adjacent.into_iter().collect(),
        }
    }

    /// This vertex's handle.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Neighbor ids in insertion order.
    pub fn adjacent(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacent.iter().copied()
    }

    /// Whether `other` is a neighbor.
    pub fn is_adjacent(&self, other: VertexId) -> bool {
        self.adjacent.contains(&other)
    }

    /// Number of neighbors (a self-loop counts once).
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    pub(crate) fn link(&mut self, other: VertexId) -> bool {
        self.adjacent.insert(other)
    }

    // shift_remove keeps the remaining neighbors in insertion order.
    pub(crate) fn unlink(&mut self, other: VertexId) -> bool {
        self.adjacent.shift_remove(&other)
    }
}
