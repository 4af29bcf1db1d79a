//! Triage Dispatch Core - Rust Engine
//!
//! Single-session emergency-room dispatch simulator: patients are admitted
//! with an urgency level, the most urgent patient is always treated next,
//! each treatment computes a shortest route between hospital departments and
//! consumes one unit from a small pool of reusable resources.
//!
//! # Architecture
//!
//! - **models**: Domain types (Patient, Doctor)
//! - **triage**: Urgency max-heap (the dispatch queue)
//! - **routing**: Department graph and dense Dijkstra shortest path
//! - **resources**: Fixed pool of allocatable resource slots
//! - **dispatch**: Main dispatch loop (Idle → Dispatching → Draining → Done)
//! - **events**: Typed event log of everything the loop did
//! - **directory**: Doctor name lookup (peripheral)
//! - **forecast**: Patient volume regression (peripheral, independent)
//!
//! # Critical Invariants
//!
//! 1. The heap never accepts an insert beyond its capacity
//! 2. Resource slots are created once and only toggle available/held
//! 3. Dispatch cycles are strictly sequential; cycle k+1 never starts
//!    before cycle k's extract/route/allocate sequence completes
//! 4. Bad operator input is reported and tolerated, never fatal

// Module declarations
pub mod directory;
pub mod dispatch;
pub mod events;
pub mod forecast;
pub mod models;
pub mod resources;
pub mod routing;
pub mod triage;

// Re-exports for convenience
pub use directory::DoctorDirectory;
pub use dispatch::{
    CycleReport, DispatchConfig, DispatchError, DispatchOperator, DispatchState, Dispatcher,
    DrainOutcome, DrainReport, RouteChoice, SessionReport, StepResult, FIXED_EDGES,
    MIN_DEPARTMENTS,
};
pub use events::{Event, EventLog};
pub use forecast::{ForecastModel, Observation, TrainingConfig};
pub use models::doctor::Doctor;
pub use models::patient::{sorted_names, Patient};
pub use resources::{ReleaseOutcome, ResourceError, ResourceTable};
pub use routing::{Orientation, Route, RouteError, RouteGraph};
pub use triage::{TriageError, TriageQueue};
