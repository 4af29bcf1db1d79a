//! Doctor records for the hospital directory.

use serde::{Deserialize, Serialize};

/// A doctor on staff, identified by an operator-entered numeric ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    id: u32,
    name: String,
}

impl Doctor {
    /// Create a new doctor record
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Numeric staff ID
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Doctor name (directory lookup key)
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doctor_accessors() {
        let d = Doctor::new(42, "Dr. Grey");
        assert_eq!(d.id(), 42);
        assert_eq!(d.name(), "Dr. Grey");
    }
}
