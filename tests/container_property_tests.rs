//! Property-based differential testing for the container layer
//!
//! Randomized operation sequences drive each container and a std
//! reference side by side; any divergence in contents, size, or order is
//! a failure.

use proptest::prelude::*;
use std::collections::{HashMap as StdHashMap, VecDeque};
use tessera::{BitSet, Deque, HashMap, HashTable, LinkedList, LruCache, PriorityQueue, Vector};

// =============================================================================
// OPERATION STRATEGIES
// =============================================================================

#[derive(Debug, Clone)]
enum SeqOp {
    PushBack(i32),
    PushFront(i32),
    PopBack,
    PopFront,
    Insert(usize, i32),
    Remove(usize),
}

fn seq_ops(max_len: usize) -> impl Strategy<Value = Vec<SeqOp>> {
    prop::collection::vec(
        prop_oneof![
            any::<i32>().prop_map(SeqOp::PushBack),
            any::<i32>().prop_map(SeqOp::PushFront),
            Just(SeqOp::PopBack),
            Just(SeqOp::PopFront),
            (any::<usize>(), any::<i32>()).prop_map(|(i, v)| SeqOp::Insert(i, v)),
            any::<usize>().prop_map(SeqOp::Remove),
        ],
        0..max_len,
    )
}

#[derive(Debug, Clone)]
enum MapOp {
    Insert(u8, i32),
    Remove(u8),
    Get(u8),
    Clear,
}

fn map_ops() -> impl Strategy<Value = Vec<MapOp>> {
    prop::collection::vec(
        prop_oneof![
            (any::<u8>(), any::<i32>()).prop_map(|(k, v)| MapOp::Insert(k, v)),
            any::<u8>().prop_map(MapOp::Remove),
            any::<u8>().prop_map(MapOp::Get),
            Just(MapOp::Clear),
        ],
        0..300,
    )
}

// =============================================================================
// VECTOR
// =============================================================================

proptest! {
    #[test]
    fn prop_vector_matches_vec(ops in seq_ops(400)) {
        let mut vec = Vector::new();
        let mut reference: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                SeqOp::PushBack(v) | SeqOp::PushFront(v) => {
                    vec.push(v).unwrap();
                    reference.push(v);
                }
                SeqOp::PopBack | SeqOp::PopFront => {
                    prop_assert_eq!(vec.pop(), reference.pop());
                }
                SeqOp::Insert(i, v) => {
                    let i = i % (reference.len() + 1);
                    vec.insert(i, v).unwrap();
                    reference.insert(i, v);
                }
                SeqOp::Remove(i) => {
                    if !reference.is_empty() {
                        let i = i % reference.len();
                        prop_assert_eq!(vec.remove(i).unwrap(), reference.remove(i));
                    }
                }
            }
            prop_assert!(vec.capacity() >= vec.len());
        }
        prop_assert_eq!(vec.as_slice(), reference.as_slice());
    }

    #[test]
    fn prop_vector_resize_truncate(lens in prop::collection::vec(0usize..200, 1..20)) {
        let mut vec = Vector::new();
        let mut reference: Vec<usize> = Vec::new();
        for (round, len) in lens.into_iter().enumerate() {
            vec.resize(len, round).unwrap();
            reference.resize(len, round);
            prop_assert_eq!(vec.as_slice(), reference.as_slice());
        }
    }
}

// =============================================================================
// DEQUE
// =============================================================================

proptest! {
    #[test]
    fn prop_deque_matches_vecdeque(ops in seq_ops(500)) {
        let mut deque = Deque::new().unwrap();
        let mut reference: VecDeque<i32> = VecDeque::new();

        for op in ops {
            match op {
                SeqOp::PushBack(v) => {
                    deque.push_back(v).unwrap();
                    reference.push_back(v);
                }
                SeqOp::PushFront(v) => {
                    deque.push_front(v).unwrap();
                    reference.push_front(v);
                }
                SeqOp::PopBack => {
                    prop_assert_eq!(deque.pop_back(), reference.pop_back());
                }
                SeqOp::PopFront => {
                    prop_assert_eq!(deque.pop_front(), reference.pop_front());
                }
                SeqOp::Insert(i, v) => {
                    let i = i % (reference.len() + 1);
                    deque.insert(i, v).unwrap();
                    reference.insert(i, v);
                }
                SeqOp::Remove(i) => {
                    if !reference.is_empty() {
                        let i = i % reference.len();
                        prop_assert_eq!(deque.remove(i).unwrap(), reference.remove(i).unwrap());
                    }
                }
            }
            prop_assert_eq!(deque.len(), reference.len());
        }

        // Indexed access agrees everywhere.
        for i in 0..reference.len() {
            prop_assert_eq!(deque[i], reference[i]);
        }
        // Front-to-back and back-to-front are mirror images.
        let forward: Vec<i32> = deque.iter().copied().collect();
        let mut backward: Vec<i32> = deque.iter().rev().copied().collect();
        backward.reverse();
        prop_assert_eq!(&forward, &backward);
        let expected: Vec<i32> = reference.iter().copied().collect();
        prop_assert_eq!(forward, expected);
    }
}

// =============================================================================
// LINKED LIST
// =============================================================================

proptest! {
    #[test]
    fn prop_list_sort_is_idempotent_and_sorted(values in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut list = LinkedList::from_slice(&values).unwrap();
        let mut expected = values.clone();
        expected.sort();

        list.sort();
        let once: Vec<i32> = list.iter().copied().collect();
        prop_assert_eq!(&once, &expected);

        list.sort();
        let twice: Vec<i32> = list.iter().copied().collect();
        prop_assert_eq!(twice, expected);
    }

    #[test]
    fn prop_list_merge_sorted(
        a in prop::collection::vec(any::<i32>(), 0..150),
        b in prop::collection::vec(any::<i32>(), 0..150),
    ) {
        let mut a = a;
        let mut b = b;
        a.sort();
        b.sort();
        let mut left = LinkedList::from_slice(&a).unwrap();
        let mut right = LinkedList::from_slice(&b).unwrap();

        left.merge(&mut right);
        prop_assert_eq!(left.len(), a.len() + b.len());
        prop_assert!(right.is_empty());

        let merged: Vec<i32> = left.iter().copied().collect();
        let mut expected = a;
        expected.extend(b);
        expected.sort();
        prop_assert_eq!(merged, expected);
    }

    #[test]
    fn prop_list_reverse_twice_is_identity(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut list = LinkedList::from_slice(&values).unwrap();
        list.reverse();
        let reversed: Vec<i32> = list.iter().copied().collect();
        let mut expected = values.clone();
        expected.reverse();
        prop_assert_eq!(reversed, expected);

        list.reverse();
        let restored: Vec<i32> = list.iter().copied().collect();
        prop_assert_eq!(restored, values);
    }
}

// =============================================================================
// HASH MAP / HASH TABLE
// =============================================================================

proptest! {
    #[test]
    fn prop_hashmap_matches_std(ops in map_ops()) {
        let mut map: HashMap<u8, i32> = HashMap::new().unwrap();
        let mut reference: StdHashMap<u8, i32> = StdHashMap::new();

        for op in ops {
            match op {
                MapOp::Insert(k, v) => {
                    prop_assert_eq!(map.insert(k, v).unwrap(), reference.insert(k, v));
                }
                MapOp::Remove(k) => {
                    prop_assert_eq!(map.remove(&k), reference.remove(&k));
                }
                MapOp::Get(k) => {
                    prop_assert_eq!(map.get(&k), reference.get(&k));
                }
                MapOp::Clear => {
                    map.clear();
                    reference.clear();
                }
            }
            prop_assert_eq!(map.len(), reference.len());
        }

        let mut pairs: Vec<(u8, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        pairs.sort();
        let mut expected: Vec<(u8, i32)> = reference.into_iter().collect();
        expected.sort();
        prop_assert_eq!(pairs, expected);
    }

    #[test]
    fn prop_hashtable_multi_counts(keys in prop::collection::vec(0u8..20, 0..300)) {
        let mut table: HashTable<u8, usize> = HashTable::new().unwrap();
        let mut counts = [0usize; 20];

        for (i, k) in keys.iter().enumerate() {
            table.insert_equal(*k, i).unwrap();
            counts[*k as usize] += 1;
        }
        for k in 0..20u8 {
            prop_assert_eq!(table.count(&k), counts[k as usize]);
        }
        prop_assert_eq!(table.len(), keys.len());

        // erase returns exactly the multiplicity, after which count is 0.
        for k in 0..20u8 {
            prop_assert_eq!(table.erase(&k), counts[k as usize]);
            prop_assert_eq!(table.count(&k), 0);
        }
        prop_assert!(table.is_empty());
    }
}

// =============================================================================
// PRIORITY QUEUE
// =============================================================================

proptest! {
    #[test]
    fn prop_priority_queue_pops_sorted(values in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut queue = PriorityQueue::new();
        for &v in &values {
            queue.push(v).unwrap();
        }

        let mut drained = Vec::with_capacity(values.len());
        while let Some(v) = queue.pop() {
            drained.push(v);
        }
        let mut expected = values;
        expected.sort_by(|a, b| b.cmp(a));
        prop_assert_eq!(drained, expected);
    }
}

// =============================================================================
// BITSET
// =============================================================================

proptest! {
    #[test]
    fn prop_bitset_shift_roundtrip(bits in prop::collection::vec(any::<bool>(), 96..=96), k in 0usize..96) {
        let mut set: BitSet<96> = BitSet::new().unwrap();
        for (i, &b) in bits.iter().enumerate() {
            set.set(i, b).unwrap();
        }
        let original = set.clone();

        set.shift_left(k);
        set.shift_right(k);
        // Low k bits zeroed, the rest preserved.
        for i in 0..96 {
            let expected = if i >= 96 - k { false } else { bits[i] };
            prop_assert_eq!(set.get(i), Some(expected));
        }

        // count matches a linear scan.
        let ones = (0..96).filter(|&i| original.get(i) == Some(true)).count();
        prop_assert_eq!(original.count_ones(), ones);

        // String form round-trips.
        let reparsed: BitSet<96> = original.to_bit_string().parse().unwrap();
        prop_assert_eq!(reparsed, original);
    }
}

// =============================================================================
// LRU CACHE
// =============================================================================

proptest! {
    #[test]
    fn prop_lru_matches_reference_model(ops in prop::collection::vec(
        prop_oneof![
            (0u8..30, any::<i32>()).prop_map(|(k, v)| (0u8, k, v)),
            (0u8..30).prop_map(|k| (1u8, k, 0)),
            (0u8..30).prop_map(|k| (2u8, k, 0)),
        ],
        0..300,
    )) {
        const CAP: usize = 8;
        let mut cache: LruCache<u8, i32> = LruCache::with_capacity(CAP).unwrap();
        // Model: vec ordered most-recent-first.
        let mut model: Vec<(u8, i32)> = Vec::new();

        for (kind, k, v) in ops {
            match kind {
                0 => {
                    cache.put(k, v).unwrap();
                    if let Some(pos) = model.iter().position(|&(mk, _)| mk == k) {
                        model.remove(pos);
                    } else if model.len() == CAP {
                        model.pop();
                    }
                    model.insert(0, (k, v));
                }
                1 => {
                    let expected = model.iter().position(|&(mk, _)| mk == k).map(|pos| {
                        let entry = model.remove(pos);
                        model.insert(0, entry);
                        entry.1
                    });
                    prop_assert_eq!(cache.get(&k).copied(), expected);
                }
                _ => {
                    let expected = model
                        .iter()
                        .position(|&(mk, _)| mk == k)
                        .map(|pos| model.remove(pos).1);
                    prop_assert_eq!(cache.remove(&k), expected);
                }
            }
            prop_assert_eq!(cache.len(), model.len());
        }

        let order: Vec<(u8, i32)> = cache.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(order, model);
    }
}
