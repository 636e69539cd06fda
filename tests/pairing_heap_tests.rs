use pairing_heap::{Error, PairingHeap};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, HashSet};

// Test helper to build a min-heap of elements 1..=n with priority equal to the element
fn heap_up_to(n: u32) -> PairingHeap<u32, u32> {
    let mut heap = PairingHeap::new();
    for i in 1..=n {
        heap.push_value(i).unwrap();
    }
    heap
}

fn drain(heap: &mut PairingHeap<u32, u32>) -> Vec<u32> {
    let mut popped = Vec::new();
    while !heap.is_empty() {
        popped.push(heap.pop().unwrap());
    }
    popped
}

#[test]
fn test_iter_returns_all_elements() {
    let mut heap = heap_up_to(500);
    heap.pop().unwrap();

    let elements: HashSet<u32> = heap.iter().copied().collect();
    assert_eq!(elements, (2..=500).collect::<HashSet<u32>>());

    let pairs: HashSet<(u32, u32)> = heap.iter_with_priority().map(|(e, p)| (*e, *p)).collect();
    assert_eq!(pairs, (2..=500).map(|x| (x, x)).collect::<HashSet<_>>());
}

#[test]
fn test_iter_is_restartable() {
    let heap = heap_up_to(50);
    let first: Vec<u32> = heap.iter().copied().collect();
    let second: Vec<u32> = heap.iter().copied().collect();
    assert_eq!(first, second);
}

#[test]
fn test_iter_empty() {
    let heap = heap_up_to(0);
    assert_eq!(heap.iter().count(), 0);
    assert_eq!(heap.iter_with_priority().count(), 0);
}

#[test]
fn test_peek_variants() {
    let mut heap: PairingHeap<u32, u32> = PairingHeap::new();
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.peek_priority(), None);
    assert_eq!(heap.peek_with_priority(), None);
    assert_eq!(heap.top(), Err(Error::EmptyHeap));

    heap.push(1, 2).unwrap();
    heap.push(3, 4).unwrap();
    assert_eq!(heap.peek_with_priority(), Some((&1, &2)));
    assert_eq!(heap.peek_priority(), Some(&2));
    assert_eq!(heap.top(), Ok(&1));
}

#[test]
fn test_pop_variants() {
    let mut heap: PairingHeap<u32, u32> = PairingHeap::new();
    heap.push(1, 2).unwrap();
    assert_eq!(heap.pop_priority(), Ok(2));
    assert!(heap.is_empty());

    heap.push(1, 2).unwrap();
    assert_eq!(heap.pop_with_priority(), Ok((1, 2)));
    assert!(heap.is_empty());

    assert_eq!(heap.pop(), Err(Error::EmptyHeap));
    assert_eq!(heap.pop_with_priority(), Err(Error::EmptyHeap));
}

#[test]
fn test_sort_correctness() {
    let mut heap: PairingHeap<usize, i32> = PairingHeap::new();
    for (elem, priority) in [5, 3, 8, 1, 9, 2].into_iter().enumerate() {
        heap.push(elem, priority).unwrap();
    }
    let mut priorities = Vec::new();
    while let Ok(priority) = heap.pop_priority() {
        priorities.push(priority);
    }
    assert_eq!(priorities, vec![1, 2, 3, 5, 8, 9]);
}

#[test]
fn test_push_rejects_duplicates() {
    let mut heap: PairingHeap<u32, u32> = PairingHeap::new();
    heap.push(1, 1).unwrap();
    assert_eq!(heap.push(1, 2), Err(Error::DuplicateElement));
    assert_eq!(heap.len(), 1);
    assert_eq!(heap.get_priority(&1), Ok(&1));
}

#[test]
fn test_change_priority_errors() {
    let mut heap: PairingHeap<u32, u32> = PairingHeap::new();
    heap.push(1, 1).unwrap();
    assert_eq!(heap.change_priority(&1, 2), Err(Error::InvalidPromotion));
    assert_eq!(heap.change_priority(&3, 0), Err(Error::UnknownElement));
    assert_eq!(heap.get_priority(&1), Ok(&1));
}

#[test]
fn test_change_priority_to_same_value_keeps_pop_order() {
    let priorities = [7, 3, 9, 1, 4, 4, 8];

    let mut untouched: PairingHeap<usize, i32> = PairingHeap::new();
    let mut touched: PairingHeap<usize, i32> = PairingHeap::new();
    for (elem, &priority) in priorities.iter().enumerate() {
        untouched.push(elem, priority).unwrap();
        touched.push(elem, priority).unwrap();
    }
    for (elem, &priority) in priorities.iter().enumerate() {
        touched.change_priority(&elem, priority).unwrap();
    }

    let mut a = Vec::new();
    let mut b = Vec::new();
    while let (Ok(x), Ok(y)) = (untouched.pop_priority(), touched.pop_priority()) {
        a.push(x);
        b.push(y);
    }
    assert_eq!(a, b);
    assert!(untouched.is_empty() && touched.is_empty());
}

#[test]
fn test_delete_last_element() {
    let mut heap: PairingHeap<u32, u32> = PairingHeap::new();
    heap.push(1, 2).unwrap();
    assert_eq!(heap.delete(&1), Ok((1, 2)));
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
}

#[test]
fn test_delete_unknown_element() {
    let mut heap: PairingHeap<u32, u32> = PairingHeap::new();
    heap.push(1, 2).unwrap();
    assert_eq!(heap.delete(&2), Err(Error::UnknownElement));
    assert_eq!(heap.len(), 1);
}

#[test]
fn test_delete_then_absent() {
    let mut heap = heap_up_to(100);
    for elem in [50, 1, 99, 23] {
        heap.delete(&elem).unwrap();
        assert_eq!(heap.get_priority(&elem), Err(Error::UnknownElement));
        assert!(!heap.contains(&elem));
    }
    let popped = drain(&mut heap);
    assert_eq!(popped.len(), 96);
    assert!(!popped.iter().any(|x| [50, 1, 99, 23].contains(x)));
}

#[test]
fn test_get_priority_and_lookup() {
    let mut heap: PairingHeap<String, u32> = PairingHeap::new();
    heap.push("one".to_string(), 2).unwrap();
    assert_eq!(heap.get_priority("one"), Ok(&2));
    assert_eq!(heap.get_priority("two"), Err(Error::UnknownElement));
    assert_eq!(heap.priority("one"), Some(&2));
    assert_eq!(heap.priority("two"), None);
    assert!(heap.contains("one"));
    assert!(!heap.contains("three"));
}

#[test]
fn test_is_empty_tracks_len() {
    let mut heap: PairingHeap<u32, u32> = PairingHeap::new();
    assert_eq!(heap.is_empty(), heap.len() == 0);
    heap.push(1, 1).unwrap();
    assert_eq!(heap.is_empty(), heap.len() == 0);
    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.peek(), None);
}

#[test]
fn test_with_capacity_and_reserve() {
    let mut heap: PairingHeap<u32, u32> = PairingHeap::with_capacity(16);
    heap.reserve(64);
    for i in (0..80).rev() {
        heap.push(i, i).unwrap();
    }
    assert_eq!(heap.pop(), Ok(0));
    assert_eq!(heap.len(), 79);
}

// Mirrors random pushes, promotions, pops and deletes against a plain map of priorities
#[test]
fn test_random_usage_against_model() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut heap: PairingHeap<u32, i64> = PairingHeap::new();
    let mut model: HashMap<u32, i64> = HashMap::new();
    let mut next_id = 0;

    for _ in 0..5_000 {
        assert_eq!(heap.is_empty(), model.is_empty());
        assert_eq!(heap.len(), model.len());

        if rng.gen_bool(0.5) {
            let priority = rng.gen_range(0..1000);
            heap.push(next_id, priority).unwrap();
            model.insert(next_id, priority);
            next_id += 1;
        }

        if model.is_empty() {
            continue;
        }

        if rng.gen_bool(0.5) {
            let ids: Vec<u32> = model.keys().copied().collect();
            let id = *ids.choose(&mut rng).unwrap();
            let priority = model[&id] - rng.gen_range(0..1000);
            heap.change_priority(&id, priority).unwrap();
            model.insert(id, priority);
        }

        if rng.gen_ratio(1, 4) {
            let expected = *model.values().min().unwrap();
            let (id, priority) = heap.pop_with_priority().unwrap();
            assert_eq!(priority, expected);
            assert_eq!(model.remove(&id), Some(priority));
        }

        if !model.is_empty() && rng.gen_ratio(1, 6) {
            let ids: Vec<u32> = model.keys().copied().collect();
            let id = *ids.choose(&mut rng).unwrap();
            assert_eq!(heap.delete(&id), Ok((id, model[&id])));
            model.remove(&id);
        }
    }

    let mut expected: Vec<i64> = model.values().copied().collect();
    expected.sort_unstable();
    let mut popped = Vec::new();
    while let Ok(priority) = heap.pop_priority() {
        popped.push(priority);
    }
    assert_eq!(popped, expected);
}

#[test]
fn test_large_number_of_consecutive_pushes() {
    let mut heap = heap_up_to(1_000_000);
    assert_eq!(heap.pop(), Ok(1));
    assert_eq!(heap.pop(), Ok(2));
    assert_eq!(heap.len(), 999_998);
}
