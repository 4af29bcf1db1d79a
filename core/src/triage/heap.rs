//! Urgency max-heap backing the dispatch queue.
//!
//! Array-backed binary max-heap over [`Patient`] with a fixed capacity set
//! at construction. The heap invariant is
//! `urgency(parent) >= urgency(child)` for every non-root element; equal
//! urgencies have no relative order (extraction ties are arbitrary, driven
//! by structural position).
//!
//! Insert and extract are O(log n) and use integer comparisons only.
//!
//! # Full-queue behavior
//!
//! An insert into a full queue fails with [`TriageError::CapacityExceeded`]
//! and performs no state change. Batch intake is all-or-nothing: a batch
//! that does not fit is refused before any element is inserted.

use crate::models::patient::Patient;
use thiserror::Error;

/// Errors from triage queue operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TriageError {
    #[error("triage queue is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },
}

/// Fixed-capacity urgency max-heap of waiting patients.
///
/// # Example
///
/// ```rust
/// use triage_dispatch_core_rs::{Patient, TriageQueue};
///
/// let mut queue = TriageQueue::new(3);
/// queue.insert(Patient::new("A", 5)).unwrap();
/// queue.insert(Patient::new("B", 9)).unwrap();
/// queue.insert(Patient::new("C", 3)).unwrap();
///
/// assert_eq!(queue.extract_max().name(), "B");
/// assert_eq!(queue.extract_max().name(), "A");
/// assert_eq!(queue.extract_max().name(), "C");
/// ```
#[derive(Debug, Clone)]
pub struct TriageQueue {
    entries: Vec<Patient>,
    capacity: usize,
}

impl TriageQueue {
    /// Create an empty queue holding at most `capacity` patients
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of waiting patients
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no patients are waiting
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of patients this queue can hold
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most urgent patient without removing it
    pub fn peek(&self) -> Option<&Patient> {
        self.entries.first()
    }

    /// Waiting patients in internal heap order (not extraction order)
    pub fn iter(&self) -> impl Iterator<Item = &Patient> {
        self.entries.iter()
    }

    /// Insert a patient, restoring the heap invariant bottom-up.
    ///
    /// Fails with [`TriageError::CapacityExceeded`] when the queue is full;
    /// the queue is left unchanged in that case.
    pub fn insert(&mut self, patient: Patient) -> Result<(), TriageError> {
        if self.entries.len() == self.capacity {
            return Err(TriageError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.entries.push(patient);
        self.sift_up(self.entries.len() - 1);
        Ok(())
    }

    /// Insert a batch of patients in input order (canonical intake path).
    ///
    /// All-or-nothing: if the batch does not fit in the remaining capacity
    /// the whole batch is refused and no patient is inserted.
    pub fn insert_batch(&mut self, patients: Vec<Patient>) -> Result<(), TriageError> {
        if patients.len() > self.capacity - self.entries.len() {
            return Err(TriageError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        for patient in patients {
            // Cannot fail: the whole batch was checked above
            self.insert(patient)?;
        }
        Ok(())
    }

    /// Remove and return the most urgent patient.
    ///
    /// Returns the sentinel empty patient (`Patient::default()`) when the
    /// queue is empty, without mutating size. Callers that must
    /// distinguish should check [`len`](Self::len) first.
    pub fn extract_max(&mut self) -> Patient {
        if self.entries.is_empty() {
            return Patient::default();
        }

        // Move the last element into the root slot, then restore the
        // invariant top-down.
        let root = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        root
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].urgency() > self.entries[parent].urgency() {
                self.entries.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut largest = index;

            if left < self.entries.len()
                && self.entries[left].urgency() > self.entries[largest].urgency()
            {
                largest = left;
            }
            if right < self.entries.len()
                && self.entries[right].urgency() > self.entries[largest].urgency()
            {
                largest = right;
            }

            if largest == index {
                break;
            }
            self.entries.swap(index, largest);
            index = largest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_queue_is_empty() {
        let queue = TriageQueue::new(4);
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 4);
        assert!(queue.peek().is_none());
    }

    #[test]
    fn test_insert_and_peek() {
        let mut queue = TriageQueue::new(4);
        queue.insert(Patient::new("low", 2)).unwrap();
        queue.insert(Patient::new("high", 8)).unwrap();

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.peek().unwrap().name(), "high");
    }

    #[test]
    fn test_insert_into_full_queue_is_refused() {
        let mut queue = TriageQueue::new(1);
        queue.insert(Patient::new("only", 1)).unwrap();

        let err = queue.insert(Patient::new("extra", 9)).unwrap_err();
        assert_eq!(err, TriageError::CapacityExceeded { capacity: 1 });

        // No state change: the original occupant is still the root
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.peek().unwrap().name(), "only");
    }

    #[test]
    fn test_batch_refused_whole_when_too_large() {
        let mut queue = TriageQueue::new(2);
        queue.insert(Patient::new("seed", 1)).unwrap();

        let batch = vec![Patient::new("a", 2), Patient::new("b", 3)];
        assert!(queue.insert_batch(batch).is_err());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_extract_from_empty_returns_sentinel() {
        let mut queue = TriageQueue::new(2);
        let p = queue.extract_max();
        assert!(p.is_sentinel());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_extraction_order_is_non_increasing() {
        let mut queue = TriageQueue::new(8);
        for (name, urgency) in [
            ("a", 4),
            ("b", 9),
            ("c", 1),
            ("d", 9),
            ("e", 7),
            ("f", 3),
        ] {
            queue.insert(Patient::new(name, urgency)).unwrap();
        }

        let mut last = u32::MAX;
        while !queue.is_empty() {
            let p = queue.extract_max();
            assert!(p.urgency() <= last);
            last = p.urgency();
        }
    }

    #[test]
    fn test_zero_capacity_queue() {
        let mut queue = TriageQueue::new(0);
        assert!(queue.insert(Patient::new("x", 1)).is_err());
        assert!(queue.extract_max().is_sentinel());
    }
}
