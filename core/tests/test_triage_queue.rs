//! Integration tests for the triage queue ordering contract.

use proptest::prelude::*;
use triage_dispatch_core_rs::{Patient, TriageError, TriageQueue};

#[test]
fn extraction_order_for_canonical_intake() {
    // The canonical scenario: {A:5, B:9, C:3} in a capacity-3 queue
    let mut queue = TriageQueue::new(3);
    queue
        .insert_batch(vec![
            Patient::new("A", 5),
            Patient::new("B", 9),
            Patient::new("C", 3),
        ])
        .unwrap();

    assert_eq!(queue.extract_max().name(), "B");
    assert_eq!(queue.extract_max().name(), "A");
    assert_eq!(queue.extract_max().name(), "C");
    assert!(queue.is_empty());
}

#[test]
fn size_tracks_inserts_and_extracts() {
    let mut queue = TriageQueue::new(10);
    for i in 0..7u32 {
        queue.insert(Patient::new(format!("p{}", i), i)).unwrap();
    }
    for _ in 0..3 {
        queue.extract_max();
    }
    // n inserts, k extracts: size is n - k
    assert_eq!(queue.len(), 4);
}

#[test]
fn extract_from_empty_is_sentinel_and_size_stays_zero() {
    let mut queue = TriageQueue::new(5);

    let p = queue.extract_max();
    assert!(p.is_sentinel());
    assert_eq!(p.name(), "");
    assert_eq!(p.urgency(), 0);
    assert_eq!(queue.len(), 0);

    // Repeated extraction stays inert
    assert!(queue.extract_max().is_sentinel());
    assert_eq!(queue.len(), 0);
}

#[test]
fn full_queue_refuses_insert_without_state_change() {
    let mut queue = TriageQueue::new(2);
    queue.insert(Patient::new("a", 3)).unwrap();
    queue.insert(Patient::new("b", 8)).unwrap();

    let err = queue.insert(Patient::new("c", 99)).unwrap_err();
    assert_eq!(err, TriageError::CapacityExceeded { capacity: 2 });

    // The refused patient never entered: extraction sees only a and b
    assert_eq!(queue.extract_max().name(), "b");
    assert_eq!(queue.extract_max().name(), "a");
}

#[test]
fn equal_urgencies_all_come_out() {
    let mut queue = TriageQueue::new(4);
    for name in ["w", "x", "y", "z"] {
        queue.insert(Patient::new(name, 7)).unwrap();
    }

    let mut names: Vec<String> = (0..4).map(|_| queue.extract_max().name().to_string()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["w", "x", "y", "z"]);
}

proptest! {
    /// For any insertion sequence within capacity, extraction is
    /// non-increasing in urgency and returns every inserted patient.
    #[test]
    fn extraction_is_sorted_non_increasing(urgencies in prop::collection::vec(0u32..100, 0..64)) {
        let mut queue = TriageQueue::new(urgencies.len());
        for (i, &u) in urgencies.iter().enumerate() {
            queue.insert(Patient::new(format!("p{}", i), u)).unwrap();
        }

        let mut extracted = Vec::new();
        while !queue.is_empty() {
            extracted.push(queue.extract_max().urgency());
        }

        prop_assert_eq!(extracted.len(), urgencies.len());
        prop_assert!(extracted.windows(2).all(|w| w[0] >= w[1]));

        let mut expected = urgencies.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(extracted, expected);
    }
}
