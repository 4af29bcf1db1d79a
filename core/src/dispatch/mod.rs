//! Dispatch loop - main orchestration of the triage session.
//!
//! Implements the `Idle → Dispatching → Draining → Done` state machine
//! tying together the triage queue, route graph, and resource table.
//!
//! See `engine.rs` for the full implementation.

pub mod engine;

// Re-export main types for convenience
pub use engine::{
    CycleReport, DispatchConfig, DispatchError, DispatchOperator, DispatchState, Dispatcher,
    DrainOutcome, DrainReport, RouteChoice, SessionReport, StepResult, FIXED_EDGES,
    MIN_DEPARTMENTS,
};
