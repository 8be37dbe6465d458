use std::fmt::Debug;

use crate::graph::{Edge, VertexId, Weight};
use crate::Result;

/// Trait representing a weighted directed graph as seen by the shortest-path engine
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertex_count()
    }

    /// Returns the display label of a vertex
    fn label(&self, vertex: VertexId) -> &str;

    /// Returns the adjacency list of a vertex, in insertion order
    fn adjacency(&self, vertex: VertexId) -> &[VertexId];

    /// Returns the unique edge from `from` to `to`
    ///
    /// Fails with `MissingEdge` when no edge matches and with `DuplicateEdge`
    /// when the edge set holds more than one edge for the ordered pair.
    fn edge_between(&self, from: VertexId, to: VertexId) -> Result<&Edge<W>>;

    /// Gets the weight of the unique edge from `from` to `to`
    fn edge_weight(&self, from: VertexId, to: VertexId) -> Result<W> {
        self.edge_between(from, to).map(|edge| edge.weight())
    }
}
