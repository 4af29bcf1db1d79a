//! Domain model types.

pub mod doctor;
pub mod patient;

pub use doctor::Doctor;
pub use patient::Patient;
