//! Hospital doctor directory.
//!
//! A Vec-backed registry with first-match name lookup by linear scan.
//! Peripheral to the dispatch triad: nothing in the core loop consults it.

use crate::models::doctor::Doctor;

/// Directory of doctors on staff.
#[derive(Debug, Clone, Default)]
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
}

impl DoctorDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self {
            doctors: Vec::new(),
        }
    }

    /// Create a directory from an existing roster
    pub fn from_roster(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }

    /// Register a doctor
    pub fn add(&mut self, doctor: Doctor) {
        self.doctors.push(doctor);
    }

    /// First doctor with the given name, by linear scan
    pub fn find_by_name(&self, name: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.name() == name)
    }

    /// All registered doctors, in registration order
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Number of registered doctors
    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    /// True when no doctors are registered
    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }
}
