use growvec::{DEFAULT_CAPACITY, Error, Sequence};

#[test]
fn new_uses_default_capacity() {
    let seq: Sequence<i32> = Sequence::new();
    assert_eq!(seq.len(), 0);
    assert!(seq.is_empty());
    assert_eq!(seq.capacity(), DEFAULT_CAPACITY);
}

#[test]
fn with_capacity_allocates_exactly() {
    let seq: Sequence<i32> = Sequence::with_capacity(7).unwrap();
    assert_eq!(seq.capacity(), 7);
    assert_eq!(seq.len(), 0);
}

#[test]
fn with_capacity_rejects_negative() {
    let err = Sequence::<i32>::with_capacity(-1).unwrap_err();
    assert_eq!(err, Error::InvalidCapacity { capacity: -1 });
}

#[test]
fn with_capacity_zero_grows_on_first_push() {
    let mut seq = Sequence::with_capacity(0).unwrap();
    assert_eq!(seq.capacity(), 0);
    seq.push(1);
    assert_eq!(seq.capacity(), DEFAULT_CAPACITY);
    assert_eq!(seq.collect(), vec![1]);
}

#[test]
fn push_preserves_order_and_len() {
    let mut seq = Sequence::new();
    for n in 0..25_u32 {
        seq.push(n);
    }
    assert_eq!(seq.len(), 25);
    for n in 0..25_u32 {
        assert_eq!(seq.get(n as usize).copied(), Ok(n));
    }
}

#[test]
fn growth_adds_default_capacity_not_doubling() {
    let mut seq = Sequence::with_capacity(5).unwrap();
    for n in 0..5 {
        seq.push(n);
    }
    assert_eq!(seq.capacity(), 5);
    seq.push(5);
    // 5 + 10, not 2 * 5
    assert_eq!(seq.capacity(), 15);
    for n in 6..15 {
        seq.push(n);
    }
    assert_eq!(seq.capacity(), 15);
    seq.push(15);
    assert_eq!(seq.capacity(), 25);
    assert_eq!(seq.collect(), (0..16).collect::<Vec<_>>());
}

#[test]
fn get_and_set_enforce_bounds() {
    let mut seq = Sequence::new();
    seq.push(1);
    seq.push(2);
    assert_eq!(seq.get(1).copied(), Ok(2));
    seq.set(1, 9).unwrap();
    assert_eq!(seq.collect(), vec![1, 9]);
    assert_eq!(seq.get(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
    assert_eq!(
        seq.set(5, 0),
        Err(Error::IndexOutOfRange { index: 5, len: 2 })
    );
    // slots between len and capacity exist but are not reachable
    assert!(seq.capacity() > seq.len());
    assert!(seq.get(seq.len()).is_err());
}

#[test]
fn index_of_finds_first_match() {
    let mut seq = Sequence::new();
    for n in [4, 7, 7, 2] {
        seq.push(n);
    }
    assert_eq!(seq.index_of(&7), Some(1));
    assert_eq!(seq.index_of(&9), None);
    assert!(seq.contains(&2));
    assert!(!seq.contains(&3));
}

#[test]
fn index_of_compares_by_value() {
    let mut seq = Sequence::new();
    seq.push("alpha".to_string());
    seq.push("beta".to_string());
    assert_eq!(seq.index_of(&"beta".to_string()), Some(1));
}

#[test]
fn first_and_last_peek_occupied_prefix() {
    let mut seq = Sequence::new();
    assert_eq!(seq.first(), None);
    assert_eq!(seq.last(), None);
    seq.push(3);
    seq.push(8);
    assert_eq!(seq.first(), Some(&3));
    assert_eq!(seq.last(), Some(&8));
}

#[test]
fn clear_keeps_capacity() {
    let mut seq = Sequence::new();
    for n in 0..12 {
        seq.push(n);
    }
    assert_eq!(seq.capacity(), 20);
    seq.clear();
    assert!(seq.is_empty());
    assert_eq!(seq.capacity(), 20);
    assert_eq!(seq.collect(), Vec::<i32>::new());
}

#[test]
fn from_iterator_follows_growth_policy() {
    let seq: Sequence<i32> = (0..11).collect();
    assert_eq!(seq.len(), 11);
    assert_eq!(seq.capacity(), 20);
    assert_eq!(seq.collect(), (0..11).collect::<Vec<_>>());
}

#[test]
fn growth_scenario_preserves_insertion_order() {
    let values = [2, 6, 8, 5, 5, 1, 8, 5, 3, 5, 7, 1, 4, 9];
    let mut seq = Sequence::with_capacity(5).unwrap();
    for v in values {
        seq.push(v);
    }
    assert_eq!(seq.len(), 14);
    assert_eq!(seq.capacity(), 15);
    let mut cursor = seq.cursor();
    let mut seen = Vec::new();
    while let Some(v) = cursor.next() {
        seen.push(v);
    }
    assert_eq!(seen, values.to_vec());
    assert_eq!(seq.index_of(&5), Some(3));
}
