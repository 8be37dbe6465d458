//! Indexed Dijkstra - single-source shortest paths over an indexed binary min-heap
//!
//! This library computes single-source shortest paths on directed graphs with
//! non-negative edge weights. The engine repeatedly extracts the closest
//! unfinished vertex from an array-backed binary min-heap and relaxes its
//! outgoing edges through a decrease-key operation that also records the new
//! parent of the relaxed vertex.
//!
//! The heap keeps a position map from vertex id to heap slot, so every
//! decrease-key runs in O(log V) and the whole run in O((V + E) log V).

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
pub use data_structures::IndexedMinHeap;
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::{Edge, Vertex, VertexId, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Negative edge weight {weight} on edge from {from} to {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(usize),

    #[error("Couldn't find an edge between {from} and its adjacent vertex {to}")]
    MissingEdge { from: String, to: String },

    #[error("Found {count} edges between {from} and its adjacent vertex {to}, expected one")]
    DuplicateEdge {
        from: String,
        to: String,
        count: usize,
    },

    #[error("Distance to {to} through {from} doesn't fit in the weight type")]
    DistanceOverflow { from: String, to: String },

    #[error("Key of {vertex} can't be increased from {current} to {requested}")]
    KeyIncrease {
        vertex: VertexId,
        current: String,
        requested: String,
    },

    #[error("There are no vertices in the heap to extract")]
    EmptyHeap,

    #[error("{0} is not in the heap")]
    VertexNotFound(VertexId),

    #[error("{0} is already in the heap")]
    VertexAlreadyQueued(VertexId),

    #[error("Heap invariant violated: {0}")]
    HeapInvariant(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
