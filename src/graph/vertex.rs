use std::fmt;
use std::hash::{Hash, Hasher};

/// Dense identifier of a vertex, assigned by the graph in insertion order
///
/// Two vertices are the same vertex iff their ids are equal; labels play no
/// part in identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl VertexId {
    /// Position of this vertex in per-vertex tables
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vertex #{}", self.0)
    }
}

/// A vertex with a display label and an ordered adjacency list
///
/// Distances and parents are not stored here; they belong to a single
/// shortest-path run and live in the heap's side table.
#[derive(Debug, Clone)]
pub struct Vertex {
    id: VertexId,
    label: String,
    adjacency: Vec<VertexId>,
}

impl Vertex {
    /// Creates a vertex with an empty adjacency list
    pub fn new(id: VertexId, label: impl Into<String>) -> Self {
        Vertex {
            id,
            label: label.into(),
            adjacency: Vec::new(),
        }
    }

    /// Creates a vertex with the given adjacency list
    pub fn with_adjacency(
        id: VertexId,
        label: impl Into<String>,
        adjacency: Vec<VertexId>,
    ) -> Self {
        Vertex {
            id,
            label: label.into(),
            adjacency,
        }
    }

    /// Dense id of this vertex
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Display label, not necessarily unique
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Neighbors in the order they were given
    pub fn adjacency(&self) -> &[VertexId] {
        &self.adjacency
    }

    pub(crate) fn set_adjacency(&mut self, adjacency: Vec<VertexId>) {
        self.adjacency = adjacency;
    }

    pub(crate) fn push_neighbor(&mut self, neighbor: VertexId) {
        self.adjacency.push(neighbor);
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
