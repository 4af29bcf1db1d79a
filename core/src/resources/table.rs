//! Fixed pool of interchangeable resource slots.
//!
//! Slots are identified by a contiguous inclusive ID range fixed at
//! construction (`[min_id, max_id]`; the reference deployment is
//! `[1, 10]`). Every slot exists for the table's lifetime and only toggles
//! between available and held — there is no creation, destruction, or
//! tracking of which patient holds which slot. Allocate and release are
//! keyed purely by numeric ID.
//!
//! Double release is tolerated: releasing an already-free slot is reported
//! as [`ReleaseOutcome::AlreadyFree`], not an error.

use thiserror::Error;

/// Errors from resource allocation and release
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResourceError {
    #[error("resource ID {id} out of range ({min_id} to {max_id})")]
    InvalidId { id: u32, min_id: u32, max_id: u32 },

    #[error("resource {id} is not available")]
    Unavailable { id: u32 },
}

/// Outcome of a release request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Slot was held and is now available again
    Released,

    /// Slot was already available; no state change
    AlreadyFree,
}

/// Fixed-size table of allocatable resource slots.
///
/// # Example
///
/// ```rust
/// use triage_dispatch_core_rs::{ReleaseOutcome, ResourceTable};
///
/// let mut table = ResourceTable::new(1, 10);
/// table.allocate(3).unwrap();
/// assert!(table.allocate(3).is_err());
///
/// assert_eq!(table.release(3).unwrap(), ReleaseOutcome::Released);
/// assert_eq!(table.release(3).unwrap(), ReleaseOutcome::AlreadyFree);
/// ```
#[derive(Debug, Clone)]
pub struct ResourceTable {
    min_id: u32,
    max_id: u32,
    /// Held flag per slot, indexed by `id - min_id`
    held: Vec<bool>,
}

impl ResourceTable {
    /// Create a table with one available slot per ID in `[min_id, max_id]`
    ///
    /// # Panics
    ///
    /// Panics if `min_id > max_id` (an empty pool is a configuration bug).
    pub fn new(min_id: u32, max_id: u32) -> Self {
        assert!(
            min_id <= max_id,
            "resource ID range [{}, {}] is empty",
            min_id,
            max_id
        );
        let count = (max_id - min_id + 1) as usize;
        Self {
            min_id,
            max_id,
            held: vec![false; count],
        }
    }

    /// Lowest usable resource ID
    pub fn min_id(&self) -> u32 {
        self.min_id
    }

    /// Highest usable resource ID
    pub fn max_id(&self) -> u32 {
        self.max_id
    }

    /// Total number of slots
    pub fn len(&self) -> usize {
        self.held.len()
    }

    /// True if the table has no slots (unreachable by construction)
    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Number of currently available slots
    pub fn available_count(&self) -> usize {
        self.held.iter().filter(|&&h| !h).count()
    }

    /// Mark the slot held.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - slot was available and is now held
    /// * `Err(ResourceError::InvalidId)` - ID outside the declared range
    /// * `Err(ResourceError::Unavailable)` - slot already held; the caller
    ///   is told allocation did not happen rather than silently losing it
    pub fn allocate(&mut self, id: u32) -> Result<(), ResourceError> {
        let slot = self.slot_index(id)?;
        if self.held[slot] {
            return Err(ResourceError::Unavailable { id });
        }
        self.held[slot] = true;
        Ok(())
    }

    /// Mark the slot available again.
    ///
    /// Releasing an already-free slot is a distinct non-error outcome.
    pub fn release(&mut self, id: u32) -> Result<ReleaseOutcome, ResourceError> {
        let slot = self.slot_index(id)?;
        if self.held[slot] {
            self.held[slot] = false;
            Ok(ReleaseOutcome::Released)
        } else {
            Ok(ReleaseOutcome::AlreadyFree)
        }
    }

    /// Currently-available slot IDs in ascending order.
    ///
    /// Lazy and restartable; no side effects.
    pub fn available_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.held
            .iter()
            .enumerate()
            .filter(|(_, &h)| !h)
            .map(move |(i, _)| self.min_id + i as u32)
    }

    fn slot_index(&self, id: u32) -> Result<usize, ResourceError> {
        if id < self.min_id || id > self.max_id {
            return Err(ResourceError::InvalidId {
                id,
                min_id: self.min_id,
                max_id: self.max_id,
            });
        }
        Ok((id - self.min_id) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_all_available() {
        let table = ResourceTable::new(1, 10);
        assert_eq!(table.len(), 10);
        assert_eq!(table.available_count(), 10);
        assert_eq!(table.available_ids().collect::<Vec<_>>(), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_allocate_marks_held() {
        let mut table = ResourceTable::new(1, 3);
        table.allocate(2).unwrap();

        assert_eq!(table.available_count(), 2);
        assert_eq!(table.available_ids().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_double_allocate_fails() {
        let mut table = ResourceTable::new(1, 3);
        table.allocate(1).unwrap();

        assert_eq!(
            table.allocate(1).unwrap_err(),
            ResourceError::Unavailable { id: 1 }
        );
    }

    #[test]
    fn test_allocate_out_of_range() {
        let mut table = ResourceTable::new(1, 10);

        for bad in [0, 11, 999] {
            assert_eq!(
                table.allocate(bad).unwrap_err(),
                ResourceError::InvalidId {
                    id: bad,
                    min_id: 1,
                    max_id: 10
                }
            );
        }
        // No slot was touched
        assert_eq!(table.available_count(), 10);
    }

    #[test]
    fn test_release_toggle() {
        let mut table = ResourceTable::new(1, 3);
        table.allocate(2).unwrap();

        assert_eq!(table.release(2).unwrap(), ReleaseOutcome::Released);
        assert_eq!(table.release(2).unwrap(), ReleaseOutcome::AlreadyFree);

        // Slot is usable again after release
        assert!(table.allocate(2).is_ok());
    }

    #[test]
    fn test_release_out_of_range() {
        let mut table = ResourceTable::new(5, 8);
        assert!(matches!(
            table.release(4),
            Err(ResourceError::InvalidId { id: 4, .. })
        ));
    }

    #[test]
    fn test_available_ids_is_restartable() {
        let mut table = ResourceTable::new(1, 4);
        table.allocate(3).unwrap();

        let first: Vec<u32> = table.available_ids().collect();
        let second: Vec<u32> = table.available_ids().collect();
        assert_eq!(first, vec![1, 2, 4]);
        assert_eq!(first, second);
    }
}
