//! Patient intake records.
//!
//! A patient is a name plus an integer urgency. Urgency is the sole
//! ordering key in the triage queue; higher values are more critical, and
//! equal urgencies carry no relative order. Patients are created at intake,
//! never mutated, and logically destroyed when treatment completes.

use serde::{Deserialize, Serialize};

/// A patient awaiting treatment.
///
/// `Patient::default()` is the sentinel "empty patient" (empty name,
/// urgency 0) returned when extracting from an empty triage queue. It is
/// not an error value; callers that must distinguish should check queue
/// size first.
///
/// # Example
///
/// ```rust
/// use triage_dispatch_core_rs::Patient;
///
/// let p = Patient::new("Ada", 9);
/// assert_eq!(p.name(), "Ada");
/// assert_eq!(p.urgency(), 9);
/// assert!(!p.is_sentinel());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Operator-entered patient name
    name: String,

    /// Higher urgency values indicate more critical conditions
    urgency: u32,
}

impl Patient {
    /// Create a new patient record
    pub fn new(name: impl Into<String>, urgency: u32) -> Self {
        Self {
            name: name.into(),
            urgency,
        }
    }

    /// Patient name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Urgency level (sole triage ordering key)
    pub fn urgency(&self) -> u32 {
        self.urgency
    }

    /// True for the sentinel empty patient
    pub fn is_sentinel(&self) -> bool {
        self.name.is_empty() && self.urgency == 0
    }
}

/// Patient names in ascending order, for display.
///
/// Display-side sorting utility; the dispatch core never depends on it.
pub fn sorted_names(patients: &[Patient]) -> Vec<String> {
    let mut names: Vec<String> = patients.iter().map(|p| p.name.clone()).collect();
    names.sort_unstable();
    names
}
