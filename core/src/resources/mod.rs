//! Resource slot pool.
//!
//! See `table.rs` for the implementation.

pub mod table;

pub use table::{ReleaseOutcome, ResourceError, ResourceTable};
