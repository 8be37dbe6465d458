use crate::graph::{VertexId, Weight};
use crate::{Error, Result};

/// Index of the parent slot, only meaningful for `index > 0`
fn parent_of(index: usize) -> usize {
    (index - 1) / 2
}

fn left_of(index: usize) -> usize {
    2 * index + 1
}

fn right_of(index: usize) -> usize {
    2 * index + 2
}

/// An array-backed binary min-heap of vertices keyed by their current distance
///
/// Besides the heap array it owns the per-vertex side tables of a single
/// shortest-path run:
/// - `positions`: vertex id -> heap slot, `None` once the vertex is extracted
///   (or if it was never inserted)
/// - `keys`: best known distance, `W::infinity()` until a path is known
/// - `parents`: predecessor on the best known path
///
/// Keys and parents can only be written by [`insert`](Self::insert) and
/// [`decrease_key_and_reparent`](Self::decrease_key_and_reparent), so the
/// heap order can't be broken from the outside.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<W>
where
    W: Weight,
{
    heap: Vec<VertexId>,
    positions: Vec<Option<usize>>,
    keys: Vec<W>,
    parents: Vec<Option<VertexId>>,
}

impl<W> IndexedMinHeap<W>
where
    W: Weight,
{
    /// Creates an empty heap able to hold vertex ids `0..capacity`
    ///
    /// Every vertex starts with an infinite key and no parent.
    pub fn new(capacity: usize) -> Self {
        IndexedMinHeap {
            heap: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
            keys: vec![W::infinity(); capacity],
            parents: vec![None; capacity],
        }
    }

    /// Builds a heap by inserting every `(vertex, key)` entry one at a time
    pub fn build<I>(capacity: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (VertexId, W)>,
    {
        let mut heap = Self::new(capacity);
        for (vertex, key) in entries {
            heap.insert(vertex, key)?;
        }
        Ok(heap)
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued vertices
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the vertex is currently queued
    pub fn contains(&self, vertex: VertexId) -> bool {
        matches!(self.positions.get(vertex.index()), Some(Some(_)))
    }

    /// Returns the vertex with the smallest key without removing it
    pub fn peek(&self) -> Option<(VertexId, W)> {
        self.heap.first().map(|&vertex| (vertex, self.keys[vertex.index()]))
    }

    /// Current key of a vertex, queued or not
    ///
    /// Ids outside the table read as unreached.
    pub fn key(&self, vertex: VertexId) -> W {
        self.keys
            .get(vertex.index())
            .copied()
            .unwrap_or_else(W::infinity)
    }

    /// Current parent of a vertex, queued or not
    pub fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        self.parents.get(vertex.index()).copied().flatten()
    }

    /// Queues a vertex with the given key and restores heap order
    pub fn insert(&mut self, vertex: VertexId, key: W) -> Result<()> {
        match self.positions.get(vertex.index()) {
            None => return Err(Error::InvalidVertex(vertex.index())),
            Some(Some(_)) => return Err(Error::VertexAlreadyQueued(vertex)),
            Some(None) => {}
        }

        self.keys[vertex.index()] = key;
        let slot = self.heap.len();
        self.heap.push(vertex);
        self.positions[vertex.index()] = Some(slot);
        self.sift_up(slot);
        Ok(())
    }

    /// Removes and returns the vertex with the smallest key
    ///
    /// The vertex keeps its key and parent in the side tables.
    pub fn extract_min(&mut self) -> Result<VertexId> {
        if self.heap.is_empty() {
            return Err(Error::EmptyHeap);
        }

        let root = self.heap.swap_remove(0);
        self.positions[root.index()] = None;

        if let Some(&moved) = self.heap.first() {
            self.positions[moved.index()] = Some(0);
            self.sift_down(0);
        }

        Ok(root)
    }

    /// Lowers the key of a queued vertex and records its new parent
    ///
    /// Requesting the current key is a no-op and leaves the parent alone;
    /// requesting a larger key is an error.
    pub fn decrease_key_and_reparent(
        &mut self,
        vertex: VertexId,
        new_key: W,
        new_parent: VertexId,
    ) -> Result<()> {
        let slot = self
            .positions
            .get(vertex.index())
            .copied()
            .flatten()
            .ok_or(Error::VertexNotFound(vertex))?;

        let current = self.keys[vertex.index()];
        if new_key > current {
            return Err(Error::KeyIncrease {
                vertex,
                current: format!("{:?}", current),
                requested: format!("{:?}", new_key),
            });
        }
        if new_key == current {
            return Ok(());
        }

        self.keys[vertex.index()] = new_key;
        self.parents[vertex.index()] = Some(new_parent);
        self.sift_up(slot);
        Ok(())
    }

    /// Heap array in slot order
    pub fn as_slice(&self) -> &[VertexId] {
        &self.heap
    }

    /// Checks that no child has a smaller key than its parent and that the
    /// position map agrees with the heap array
    pub fn is_heap(&self) -> bool {
        let ordered = (1..self.heap.len())
            .all(|i| self.key_at(parent_of(i)) <= self.key_at(i));
        let indexed = self
            .heap
            .iter()
            .enumerate()
            .all(|(slot, vertex)| self.positions[vertex.index()] == Some(slot));
        ordered && indexed
    }

    /// Gives up the key and parent tables, typically once the heap is drained
    pub fn into_tables(self) -> (Vec<W>, Vec<Option<VertexId>>) {
        (self.keys, self.parents)
    }

    fn key_at(&self, slot: usize) -> W {
        self.keys[self.heap[slot].index()]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].index()] = Some(a);
        self.positions[self.heap[b].index()] = Some(b);
    }

    /// Moves the element at `slot` up while it is strictly smaller than its parent
    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = parent_of(slot);
            if self.key_at(slot) >= self.key_at(parent) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    /// Moves the element at `slot` down while a child is strictly smaller,
    /// preferring the left child on ties
    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = left_of(slot);
            if left >= len {
                break;
            }
            let right = right_of(slot);
            let smaller = if right < len && self.key_at(right) < self.key_at(left) {
                right
            } else {
                left
            };
            if self.key_at(smaller) >= self.key_at(slot) {
                break;
            }
            self.swap(slot, smaller);
            slot = smaller;
        }
    }
}
