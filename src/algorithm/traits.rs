use log::warn;

use crate::graph::{Graph, VertexId, Weight};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Final key of each vertex, `W::infinity()` when unreachable
    pub distances: Vec<W>,

    /// Parent of each vertex in the shortest path tree
    pub parents: Vec<Option<VertexId>>,

    /// Vertices in the order they were finalized
    pub finalized: Vec<VertexId>,

    /// Source vertex ID
    pub source: VertexId,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Final distance of a vertex from the source
    pub fn key(&self, vertex: VertexId) -> W {
        self.distances
            .get(vertex.index())
            .copied()
            .unwrap_or_else(W::infinity)
    }

    /// Parent of a vertex on its shortest path, `None` for the source and unreachable vertices
    pub fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        self.parents.get(vertex.index()).copied().flatten()
    }

    /// Returns true if the vertex has a finite key
    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        !self.key(vertex).is_infinite()
    }

    /// Returns true if the vertex was extracted during the run
    pub fn is_finalized(&self, vertex: VertexId) -> bool {
        self.finalized.contains(&vertex)
    }

    /// `(vertex, key, parent)` for every finalized vertex, in extraction order
    pub fn settled(&self) -> impl Iterator<Item = (VertexId, W, Option<VertexId>)> + '_ {
        self.finalized
            .iter()
            .map(move |&vertex| (vertex, self.key(vertex), self.parent(vertex)))
    }

    /// Number of vertices with a finite distance
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|key| !key.is_infinite()).count()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: VertexId) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices,
    /// following parent pointers back from the target
    fn get_path(&self, result: &ShortestPathResult<W>, target: VertexId) -> Option<Vec<VertexId>> {
        if target.index() >= result.parents.len() || !result.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;

        while current != result.source {
            match result.parent(current) {
                Some(parent) => {
                    current = parent;
                    path.push(current);
                }
                None => {
                    warn!(
                        "Parent chain of {} stops at {} before reaching the source",
                        target, current
                    );
                    return None;
                }
            }

            if path.len() > result.parents.len() {
                warn!("Parent chain of {} loops, path length exceeds graph size", target);
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}
