pub mod directed;
pub mod edge;
pub mod generators;
pub mod traits;
pub mod vertex;
pub mod weight;

pub use directed::DirectedGraph;
pub use edge::Edge;
pub use traits::Graph;
pub use vertex::{Vertex, VertexId};
pub use weight::Weight;
