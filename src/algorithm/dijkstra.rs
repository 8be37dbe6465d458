use log::{debug, trace};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::IndexedMinHeap;
use crate::graph::{Graph, VertexId, Weight};
use crate::{Error, Result};

/// Dijkstra's algorithm driven by an [`IndexedMinHeap`]
///
/// Every vertex is queued up front with an infinite key (the source with
/// zero). Each round extracts the closest queued vertex, finalizes it and
/// relaxes the edges named by its adjacency list through
/// [`IndexedMinHeap::decrease_key_and_reparent`].
///
/// Edge weights must be non-negative. This is not re-checked here:
/// [`DirectedGraph`](crate::DirectedGraph) refuses negative weights when edges
/// are added, other [`Graph`] implementations have to uphold it themselves.
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    /// Check the heap invariant after every heap operation
    verify_heap: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra { verify_heap: false }
    }

    /// Enable or disable the heap invariant check after every heap operation
    pub fn with_heap_verification(mut self, enabled: bool) -> Self {
        self.verify_heap = enabled;
        self
    }

    fn check_heap<W: Weight>(&self, heap: &IndexedMinHeap<W>, after: &str) -> Result<()> {
        if self.verify_heap && !heap.is_heap() {
            return Err(Error::HeapInvariant(format!(
                "heap order broken after {} ({} vertices queued)",
                after,
                heap.len()
            )));
        }
        Ok(())
    }

    /// Relaxes the edge `u -> v`
    ///
    /// The edge lookup happens first so an inconsistent graph is reported even
    /// when `u` itself is unreachable. A finite distance that can't be
    /// represented below the infinity sentinel aborts the run.
    fn relax<W, G>(
        &self,
        graph: &G,
        heap: &mut IndexedMinHeap<W>,
        u: VertexId,
        v: VertexId,
    ) -> Result<()>
    where
        W: Weight,
        G: Graph<W>,
    {
        let weight = graph.edge_weight(u, v)?;

        let key = heap.key(u);
        if key.is_infinite() {
            return Ok(());
        }

        let candidate = match key.checked_add(weight) {
            Some(sum) if !sum.is_infinite() => sum,
            _ => {
                return Err(Error::DistanceOverflow {
                    from: graph.label(u).to_string(),
                    to: graph.label(v).to_string(),
                })
            }
        };

        if heap.key(v) > candidate {
            trace!(
                "Relaxing {} -> {}: {:?} -> {:?}",
                graph.label(u),
                graph.label(v),
                heap.key(v),
                candidate
            );
            // A finalized v is no longer queued, so the heap refuses the update
            heap.decrease_key_and_reparent(v, candidate, u)?;
            self.check_heap(heap, "decrease-key")?;
        }

        Ok(())
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: VertexId,
    ) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source.index()));
        }

        let n = graph.vertex_count();
        debug!(
            "Running Dijkstra from {} over {} vertices and {} edges",
            graph.label(source),
            n,
            graph.edge_count()
        );

        let entries = (0..n).map(VertexId).map(|vertex| {
            let key = if vertex == source {
                W::zero()
            } else {
                W::infinity()
            };
            (vertex, key)
        });

        // With verification on, every insert is checked on its own
        let mut heap = if self.verify_heap {
            let mut heap = IndexedMinHeap::new(n);
            for (vertex, key) in entries {
                heap.insert(vertex, key)?;
                self.check_heap(&heap, "insert")?;
            }
            heap
        } else {
            IndexedMinHeap::build(n, entries)?
        };

        let mut finalized = Vec::with_capacity(n);

        while !heap.is_empty() {
            let u = heap.extract_min()?;
            self.check_heap(&heap, "extraction")?;
            trace!("Finalized {} at {:?}", graph.label(u), heap.key(u));
            finalized.push(u);

            for &v in graph.adjacency(u) {
                self.relax(graph, &mut heap, u, v)?;
            }
        }

        let (distances, parents) = heap.into_tables();
        let result = ShortestPathResult {
            distances,
            parents,
            finalized,
            source,
        };
        debug!(
            "Dijkstra from {} reached {} of {} vertices",
            graph.label(source),
            result.reachable_count(),
            n
        );

        Ok(result)
    }
}
