use indexed_dijkstra::data_structures::IndexedMinHeap;
use indexed_dijkstra::graph::VertexId;
use indexed_dijkstra::Error;
use proptest::prelude::*;

fn heap_of(keys: &[u32]) -> IndexedMinHeap<u32> {
    let entries = keys.iter().enumerate().map(|(i, &key)| (VertexId(i), key));
    IndexedMinHeap::build(keys.len(), entries).unwrap()
}

fn drain(heap: &mut IndexedMinHeap<u32>) -> Vec<u32> {
    let mut keys = Vec::new();
    while !heap.is_empty() {
        let vertex = heap.extract_min().unwrap();
        assert!(heap.is_heap());
        keys.push(heap.key(vertex));
    }
    keys
}

#[test]
fn test_extract_returns_keys_in_order() {
    let mut heap = heap_of(&[9, 4, 7, 1, 8, 2, 6, 3, 5]);
    assert!(heap.is_heap());
    assert_eq!(heap.len(), 9);
    assert_eq!(heap.peek(), Some((VertexId(3), 1)));
    assert_eq!(drain(&mut heap), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_new_vertices_start_unreached() {
    let heap: IndexedMinHeap<u32> = IndexedMinHeap::new(3);
    assert!(heap.is_empty());
    assert_eq!(heap.key(VertexId(1)), u32::MAX);
    assert_eq!(heap.parent(VertexId(1)), None);
    assert!(!heap.contains(VertexId(1)));
}

#[test]
fn test_sift_down_with_lone_left_child() {
    // After the first extraction the moved-in root has only a smaller left child
    let mut heap = heap_of(&[1, 3, 5]);
    assert_eq!(heap.extract_min().unwrap(), VertexId(0));
    assert!(heap.is_heap());
    assert_eq!(heap.as_slice(), &[VertexId(1), VertexId(2)]);
    assert_eq!(drain(&mut heap), vec![3, 5]);
}

#[test]
fn test_decrease_key_moves_vertex_to_root_and_sets_parent() {
    let mut heap = heap_of(&[2, 5, 8, 13]);
    heap.decrease_key_and_reparent(VertexId(3), 1, VertexId(0)).unwrap();

    assert!(heap.is_heap());
    assert_eq!(heap.peek(), Some((VertexId(3), 1)));
    assert_eq!(heap.parent(VertexId(3)), Some(VertexId(0)));
    assert_eq!(heap.as_slice()[0], VertexId(3));
}

#[test]
fn test_decrease_key_of_root() {
    let mut heap = heap_of(&[2, 5, 8]);
    heap.decrease_key_and_reparent(VertexId(0), 0, VertexId(2)).unwrap();
    assert_eq!(heap.peek(), Some((VertexId(0), 0)));
    assert_eq!(heap.parent(VertexId(0)), Some(VertexId(2)));
}

#[test]
fn test_decrease_key_to_same_value_is_noop() {
    let mut heap = heap_of(&[2, 5, 8]);
    heap.decrease_key_and_reparent(VertexId(1), 5, VertexId(0)).unwrap();
    assert_eq!(heap.key(VertexId(1)), 5);
    assert_eq!(heap.parent(VertexId(1)), None);
}

#[test]
fn test_increasing_a_key_is_rejected() {
    let mut heap = heap_of(&[2, 5, 8]);
    let error = heap.decrease_key_and_reparent(VertexId(1), 6, VertexId(0)).unwrap_err();
    assert_eq!(
        error,
        Error::KeyIncrease {
            vertex: VertexId(1),
            current: "5".to_string(),
            requested: "6".to_string()
        }
    );
    assert_eq!(heap.key(VertexId(1)), 5);
    assert!(heap.is_heap());
}

#[test]
fn test_extract_from_empty_heap() {
    let mut heap: IndexedMinHeap<u32> = IndexedMinHeap::new(2);
    assert_eq!(heap.extract_min(), Err(Error::EmptyHeap));

    heap.insert(VertexId(1), 4).unwrap();
    assert_eq!(heap.extract_min(), Ok(VertexId(1)));
    assert_eq!(heap.extract_min(), Err(Error::EmptyHeap));
}

#[test]
fn test_decrease_key_of_extracted_vertex() {
    let mut heap = heap_of(&[1, 5]);
    let root = heap.extract_min().unwrap();
    assert_eq!(
        heap.decrease_key_and_reparent(root, 0, VertexId(1)),
        Err(Error::VertexNotFound(root))
    );
    // Extracted vertices keep their final key
    assert_eq!(heap.key(root), 1);
}

#[test]
fn test_decrease_key_of_unknown_vertex() {
    let mut heap = heap_of(&[1, 5]);
    assert_eq!(
        heap.decrease_key_and_reparent(VertexId(10), 0, VertexId(0)),
        Err(Error::VertexNotFound(VertexId(10)))
    );
}

#[test]
fn test_insert_rejects_duplicates_and_unknown_ids() {
    let mut heap: IndexedMinHeap<u32> = IndexedMinHeap::new(2);
    heap.insert(VertexId(0), 3).unwrap();
    assert_eq!(heap.insert(VertexId(0), 1), Err(Error::VertexAlreadyQueued(VertexId(0))));
    assert_eq!(heap.insert(VertexId(2), 1), Err(Error::InvalidVertex(2)));
    assert_eq!(heap.len(), 1);
}

#[test]
fn test_tables_survive_draining() {
    let mut heap = heap_of(&[0, 9, 9]);
    heap.decrease_key_and_reparent(VertexId(2), 4, VertexId(0)).unwrap();
    drain(&mut heap);

    let (keys, parents) = heap.into_tables();
    assert_eq!(keys, vec![0, 9, 4]);
    assert_eq!(parents, vec![None, None, Some(VertexId(0))]);
}

proptest! {
    #[test]
    fn test_heap_invariant_under_random_operations(
        initial in prop::collection::vec(0u32..1_000, 1..60),
        ops in prop::collection::vec((any::<bool>(), 0usize..60, 0u32..1_000), 0..120)
    ) {
        let mut heap = heap_of(&initial);
        let mut model: Vec<Option<u32>> = initial.iter().copied().map(Some).collect();

        for (extract, index, key) in ops {
            if extract {
                if heap.is_empty() {
                    prop_assert_eq!(heap.extract_min(), Err(Error::EmptyHeap));
                    continue;
                }
                let vertex = heap.extract_min().unwrap();
                let smallest = model.iter().flatten().min().copied();
                prop_assert_eq!(Some(heap.key(vertex)), smallest);
                model[vertex.index()] = None;
            } else {
                let index = index % initial.len();
                let vertex = VertexId(index);
                match model[index] {
                    None => prop_assert_eq!(
                        heap.decrease_key_and_reparent(vertex, key, VertexId(0)),
                        Err(Error::VertexNotFound(vertex))
                    ),
                    Some(current) if key > current => prop_assert!(matches!(
                        heap.decrease_key_and_reparent(vertex, key, VertexId(0)),
                        Err(Error::KeyIncrease { .. })
                    ), "expected Err(Error::KeyIncrease {{ .. }})"),
                    Some(_) => {
                        heap.decrease_key_and_reparent(vertex, key, VertexId(0)).unwrap();
                        model[index] = Some(key);
                    }
                }
            }

            prop_assert!(heap.is_heap());
            prop_assert_eq!(heap.len(), model.iter().flatten().count());
        }
    }

    #[test]
    fn test_drain_is_sorted(keys in prop::collection::vec(0u32..10_000, 0..200)) {
        let mut heap = heap_of(&keys);
        let mut expected = keys.clone();
        expected.sort_unstable();
        prop_assert_eq!(drain(&mut heap), expected);
    }
}
