//! Triage queue - urgency max-heap.
//!
//! See `heap.rs` for the implementation.

pub mod heap;

pub use heap::{TriageError, TriageQueue};
