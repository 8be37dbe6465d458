use crate::graph::traits::Graph;
use crate::graph::{Edge, Vertex, VertexId, Weight};
use crate::{Error, Result};
use std::collections::HashMap;

/// A directed graph holding a vertex arena and an edge set
///
/// Adjacency lists and the edge set are stored independently and are not
/// required to agree; the shortest-path engine reports any disagreement it
/// runs into. Use [`DirectedGraph::validate`] to check them up front.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Vertices indexed by their id
    vertices: Vec<Vertex>,

    /// Edges in insertion order
    edges: Vec<Edge<W>>,

    /// (from, to) -> positions in `edges`
    edge_index: HashMap<(VertexId, VertexId), Vec<usize>>,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            vertices: Vec::new(),
            edges: Vec::new(),
            edge_index: HashMap::new(),
        }
    }

    /// Creates a new empty directed graph with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            vertices: Vec::with_capacity(vertices),
            edges: Vec::new(),
            edge_index: HashMap::with_capacity(vertices),
        }
    }

    /// Assembles a graph from an explicit vertex set and edge set
    ///
    /// Vertex ids must be `0..n` in order, and every edge endpoint and
    /// adjacency entry must name one of those vertices.
    pub fn from_parts(vertices: Vec<Vertex>, edges: Vec<Edge<W>>) -> Result<Self> {
        for (index, vertex) in vertices.iter().enumerate() {
            if vertex.id().index() != index {
                return Err(Error::InvalidVertex(vertex.id().index()));
            }
        }

        let mut graph = DirectedGraph {
            vertices,
            edges: Vec::with_capacity(edges.len()),
            edge_index: HashMap::new(),
        };

        for vertex in &graph.vertices {
            if let Some(bad) = vertex.adjacency().iter().find(|n| !graph.has_vertex(**n)) {
                return Err(Error::InvalidVertex(bad.index()));
            }
        }

        for edge in edges {
            graph.add_edge(edge.from(), edge.to(), edge.weight())?;
        }

        Ok(graph)
    }

    /// Adds a vertex with an empty adjacency list and returns its ID
    pub fn add_vertex(&mut self, label: impl Into<String>) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex::new(id, label));
        id
    }

    /// Adds a directed edge to the edge set without touching any adjacency list
    ///
    /// A second edge for the same ordered pair is kept as well, the engine
    /// rejects the pair when it tries to relax it.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: W) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        if weight.is_negative() {
            return Err(Error::NegativeWeight {
                from: self.label(from).to_string(),
                to: self.label(to).to_string(),
                weight: format!("{:?}", weight),
            });
        }

        self.edge_index
            .entry((from, to))
            .or_default()
            .push(self.edges.len());
        self.edges.push(Edge::new(from, to, weight));
        Ok(())
    }

    /// Replaces the adjacency list of a vertex
    pub fn set_adjacency(&mut self, vertex: VertexId, adjacency: Vec<VertexId>) -> Result<()> {
        self.check_vertex(vertex)?;
        for neighbor in &adjacency {
            self.check_vertex(*neighbor)?;
        }
        self.vertices[vertex.index()].set_adjacency(adjacency);
        Ok(())
    }

    /// Adds an edge and appends its target to the source's adjacency list
    pub fn connect(&mut self, from: VertexId, to: VertexId, weight: W) -> Result<()> {
        self.add_edge(from, to, weight)?;
        self.vertices[from.index()].push_neighbor(to);
        Ok(())
    }

    /// Returns the vertex with the given ID
    pub fn vertex(&self, vertex: VertexId) -> Option<&Vertex> {
        self.vertices.get(vertex.index())
    }

    /// All vertices, ordered by ID
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All edges, in insertion order
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Finds the first vertex carrying the given label
    pub fn find_by_label(&self, label: &str) -> Option<VertexId> {
        self.vertices
            .iter()
            .find(|vertex| vertex.label() == label)
            .map(Vertex::id)
    }

    /// Checks that every adjacency entry has exactly one matching edge
    ///
    /// Returns the same error the shortest-path engine would raise when it
    /// relaxes the first inconsistent entry.
    pub fn validate(&self) -> Result<()> {
        for vertex in &self.vertices {
            for neighbor in vertex.adjacency() {
                self.edge_between(vertex.id(), *neighbor)?;
            }
        }
        Ok(())
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if self.has_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::InvalidVertex(vertex.index()))
        }
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn label(&self, vertex: VertexId) -> &str {
        self.vertices
            .get(vertex.index())
            .map(Vertex::label)
            .unwrap_or("<unknown>")
    }

    fn adjacency(&self, vertex: VertexId) -> &[VertexId] {
        self.vertices
            .get(vertex.index())
            .map(Vertex::adjacency)
            .unwrap_or(&[])
    }

    fn edge_between(&self, from: VertexId, to: VertexId) -> Result<&Edge<W>> {
        match self.edge_index.get(&(from, to)).map(Vec::as_slice) {
            Some([single]) => Ok(&self.edges[*single]),
            Some(matches) if matches.len() > 1 => Err(Error::DuplicateEdge {
                from: self.label(from).to_string(),
                to: self.label(to).to_string(),
                count: matches.len(),
            }),
            _ => Err(Error::MissingEdge {
                from: self.label(from).to_string(),
                to: self.label(to).to_string(),
            }),
        }
    }
}
