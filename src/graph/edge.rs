use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};

use crate::graph::VertexId;

/// A directed, weighted edge
///
/// Equality and hashing only look at the `(from, to)` pair: `(a, b, 2)` and
/// `(a, b, 4)` are the same edge, while `(a, b, 2)` and `(b, a, 2)` are not.
#[derive(Debug, Clone, Copy)]
pub struct Edge<W> {
    from: VertexId,
    to: VertexId,
    weight: W,
}

impl<W: Copy> Edge<W> {
    /// Creates an edge from `from` to `to`
    pub fn new(from: VertexId, to: VertexId, weight: W) -> Self {
        Edge { from, to, weight }
    }

    /// Tail of the edge
    pub fn from(&self) -> VertexId {
        self.from
    }

    /// Head of the edge
    pub fn to(&self) -> VertexId {
        self.to
    }

    /// Weight of the edge
    pub fn weight(&self) -> W {
        self.weight
    }

    /// The ordered `(from, to)` pair identifying this edge
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.from, self.to)
    }
}

impl<W> PartialEq for Edge<W> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl<W> Eq for Edge<W> {}

impl<W> Hash for Edge<W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl<W: Debug> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Edge from {} to {} having weight {:?}",
            self.from.0, self.to.0, self.weight
        )
    }
}
