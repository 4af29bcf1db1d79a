//! Dispatch Engine
//!
//! Main session loop integrating all components:
//! - Triage queue (urgency max-heap, batch intake)
//! - Route graph (dense Dijkstra per treatment cycle)
//! - Resource table (one allocation per cycle, symmetric drain)
//! - Event logging (complete session history)
//!
//! # Architecture
//!
//! The Dispatcher is the sole consumer of the three components; they never
//! call each other. Each step advances the state machine:
//!
//! ```text
//! Idle ──────────► Dispatching ──(queue empty)──► Draining ──► Done
//!                  per cycle:                     per step:
//!                  1. extract most urgent         1. ask release ID
//!                  2. ask route, query graph      2. release (tolerant)
//!                  3. ask resource ID, allocate   3. count down
//!                  4. count up
//! ```
//!
//! Operator-supplied values may be invalid; the engine validates, reports
//! the failure as an event, and always advances to the next cycle. It never
//! retries a prompt and never aborts the session over bad input. Only
//! configuration errors (at construction) are fatal.
//!
//! # Example
//!
//! ```rust
//! use triage_dispatch_core_rs::dispatch::engine::*;
//! use triage_dispatch_core_rs::{Orientation, Patient};
//!
//! struct FixedOperator;
//!
//! impl DispatchOperator for FixedOperator {
//!     fn choose_route(&mut self, _patient: &Patient) -> RouteChoice {
//!         RouteChoice { src: 0, dest: 3 }
//!     }
//!     fn choose_resource(&mut self, _patient: &Patient) -> u32 {
//!         1
//!     }
//!     fn choose_release(&mut self) -> u32 {
//!         1
//!     }
//! }
//!
//! let config = DispatchConfig {
//!     department_names: vec![
//!         "ER".into(), "Radiology".into(), "Surgery".into(),
//!         "ICU".into(), "Pharmacy".into(),
//!     ],
//!     orientation: Some(Orientation::Directed),
//!     queue_capacity: 1,
//!     resource_id_range: (1, 10),
//!     patients: vec![Patient::new("A", 5)],
//! };
//!
//! let mut dispatcher = Dispatcher::new(config).unwrap();
//! let report = dispatcher.run(&mut FixedOperator);
//! assert_eq!(report.treated.len(), 1);
//! ```

use crate::events::{Event, EventLog};
use crate::models::patient::Patient;
use crate::resources::{ReleaseOutcome, ResourceTable};
use crate::routing::{Orientation, Route, RouteError, RouteGraph};
use crate::triage::{TriageError, TriageQueue};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Configuration
// ============================================================================

/// The hard-coded department edge set, installed for every session
/// regardless of department count or names: 0→1 w1, 1→2 w3, 2→4 w2,
/// 4→3 w1, 3→0 w5. Node indices 0 through 4 must exist, hence
/// [`MIN_DEPARTMENTS`].
pub const FIXED_EDGES: [(usize, usize, u32); 5] =
    [(0, 1, 1), (1, 2, 3), (2, 4, 2), (4, 3, 1), (3, 0, 5)];

/// Minimum department count required by [`FIXED_EDGES`]
pub const MIN_DEPARTMENTS: usize = 5;

/// Complete dispatch session configuration.
///
/// # Fields
///
/// * `department_names` - one name per graph node, index order
/// * `orientation` - whether [`FIXED_EDGES`] is installed directed or
///   undirected; `None` installs nothing and leaves the graph
///   disconnected (the original's behavior for an unrecognized
///   orientation answer)
/// * `queue_capacity` - triage queue capacity
/// * `resource_id_range` - inclusive `(min_id, max_id)` resource pool
/// * `patients` - intake batch, inserted in input order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    pub department_names: Vec<String>,
    pub orientation: Option<Orientation>,
    pub queue_capacity: usize,
    pub resource_id_range: (u32, u32),
    pub patients: Vec<Patient>,
}

/// Errors from session configuration and construction
#[derive(Debug, Error, PartialEq)]
pub enum DispatchError {
    #[error("at least {required} departments required for the fixed edge set, got {actual}")]
    TooFewDepartments { required: usize, actual: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("intake failed: {0}")]
    Intake(#[from] TriageError),

    #[error("graph construction failed: {0}")]
    Graph(#[from] RouteError),
}

// ============================================================================
// Operator seam
// ============================================================================

/// Route endpoints requested from the operator for one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteChoice {
    pub src: usize,
    pub dest: usize,
}

/// The external input stream driving a session.
///
/// One implementation prompts a human operator; tests script the answers.
/// Returned values are *not* trusted: endpoints and resource IDs may be
/// out of range, and the engine will report and tolerate them. Every call
/// is a synchronous suspension point — the loop blocks until a value (even
/// an invalid one) is supplied.
pub trait DispatchOperator {
    /// Route endpoints for the patient being treated this cycle
    fn choose_route(&mut self, patient: &Patient) -> RouteChoice;

    /// Resource ID to allocate for the patient being treated this cycle
    fn choose_resource(&mut self, patient: &Patient) -> u32;

    /// Resource ID to release during the drain phase
    fn choose_release(&mut self) -> u32;
}

// ============================================================================
// Step results
// ============================================================================

/// What happened in one treatment cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// Patient extracted this cycle (most urgent at the time)
    pub patient: Patient,

    /// Computed route, or None when the query was skipped or unreachable
    pub route: Option<Route>,

    /// Allocated resource ID, or None when allocation did not happen
    pub allocated: Option<u32>,
}

/// Outcome of one drain-phase step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainOutcome {
    /// Slot was held and is now free
    Released,

    /// Slot was already free (tolerated no-op)
    AlreadyFree,

    /// ID outside the declared range; nothing happened
    Invalid,
}

/// Report for one drain-phase step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrainReport {
    pub id: u32,
    pub outcome: DrainOutcome,
}

/// Result of a single engine step
#[derive(Debug, Clone, PartialEq)]
pub enum StepResult {
    /// A treatment cycle ran
    Treated(CycleReport),

    /// A drain step ran
    Released(DrainReport),

    /// Session is done; no further queue or resource operations
    Finished,
}

/// Summary of a completed session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionReport {
    /// Patients in treatment order
    pub treated: Vec<Patient>,

    /// Cycles whose route query succeeded
    pub routes_computed: usize,

    /// Cycles whose allocation succeeded
    pub allocations: usize,

    /// Drain steps that actually freed a slot
    pub releases: usize,
}

// ============================================================================
// Dispatch state machine
// ============================================================================

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    /// Queue populated, nothing dispatched yet
    Idle,

    /// Treating patients while the queue is non-empty
    Dispatching,

    /// Symmetric release phase, one step per completed cycle
    Draining,

    /// Terminal
    Done,
}

/// Main dispatcher owning the triage queue, route graph, and resource
/// table for the duration of one session.
///
/// The binding of a patient to its route and resource is transient — it
/// exists only for the duration of one cycle (and its [`CycleReport`]);
/// only the net effect on queue size and slot availability persists.
#[derive(Debug)]
pub struct Dispatcher {
    graph: RouteGraph,
    queue: TriageQueue,
    resources: ResourceTable,
    state: DispatchState,

    /// Completed treatment cycles (1-based cycle numbers in events)
    cycles: usize,

    /// Drain steps still owed; incremented once per treatment cycle
    pending_releases: usize,

    /// Drain steps that actually freed a slot
    released: usize,

    event_log: EventLog,
}

impl Dispatcher {
    /// Build a session from configuration.
    ///
    /// Constructs the graph (installing [`FIXED_EDGES`] per the configured
    /// orientation), the resource table, and the triage queue, then admits
    /// the intake batch. State starts at [`DispatchState::Idle`].
    ///
    /// # Returns
    ///
    /// * `Ok(Dispatcher)` - session ready to run
    /// * `Err(DispatchError)` - configuration rejected
    pub fn new(config: DispatchConfig) -> Result<Self, DispatchError> {
        Self::validate_config(&config)?;

        let mut graph = RouteGraph::new(config.department_names);
        if let Some(orientation) = config.orientation {
            graph.install_edges(orientation, &FIXED_EDGES)?;
        }

        let (min_id, max_id) = config.resource_id_range;
        let resources = ResourceTable::new(min_id, max_id);

        let mut event_log = EventLog::new();
        for patient in &config.patients {
            event_log.log(Event::PatientAdmitted {
                name: patient.name().to_string(),
                urgency: patient.urgency(),
            });
        }

        let mut queue = TriageQueue::new(config.queue_capacity);
        queue.insert_batch(config.patients)?;

        Ok(Self {
            graph,
            queue,
            resources,
            state: DispatchState::Idle,
            cycles: 0,
            pending_releases: 0,
            released: 0,
            event_log,
        })
    }

    fn validate_config(config: &DispatchConfig) -> Result<(), DispatchError> {
        if config.department_names.len() < MIN_DEPARTMENTS {
            return Err(DispatchError::TooFewDepartments {
                required: MIN_DEPARTMENTS,
                actual: config.department_names.len(),
            });
        }
        if config.department_names.iter().any(|n| n.is_empty()) {
            return Err(DispatchError::InvalidConfig(
                "department names must be non-empty".to_string(),
            ));
        }
        let (min_id, max_id) = config.resource_id_range;
        if min_id > max_id {
            return Err(DispatchError::InvalidConfig(format!(
                "resource ID range [{}, {}] is empty",
                min_id, max_id
            )));
        }
        Ok(())
    }

    /// Current session phase
    pub fn state(&self) -> DispatchState {
        self.state
    }

    /// Waiting patients
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Waiting patients in internal heap order
    pub fn waiting(&self) -> impl Iterator<Item = &Patient> {
        self.queue.iter()
    }

    /// The resource table (for availability display)
    pub fn resources(&self) -> &ResourceTable {
        &self.resources
    }

    /// The department graph
    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    /// Complete session event history so far
    pub fn events(&self) -> &[Event] {
        self.event_log.events()
    }

    /// Drain steps still owed
    pub fn pending_releases(&self) -> usize {
        self.pending_releases
    }

    /// Advance the session by one step.
    ///
    /// Runs one treatment cycle while patients wait, then one drain step
    /// per completed cycle, then reports [`StepResult::Finished`]
    /// indefinitely. Strictly sequential: each call completes its whole
    /// extract/route/allocate (or release) sequence before returning.
    pub fn step(&mut self, operator: &mut dyn DispatchOperator) -> StepResult {
        // Phase transitions are lazy: recomputed at the top of each step
        if self.state == DispatchState::Idle {
            self.state = DispatchState::Dispatching;
        }
        if self.state == DispatchState::Dispatching && self.queue.is_empty() {
            self.state = if self.pending_releases > 0 {
                DispatchState::Draining
            } else {
                self.finish();
                DispatchState::Done
            };
        }

        match self.state {
            DispatchState::Dispatching => StepResult::Treated(self.treatment_cycle(operator)),
            DispatchState::Draining => StepResult::Released(self.drain_step(operator)),
            DispatchState::Done => StepResult::Finished,
            // Unreachable: Idle was advanced above
            DispatchState::Idle => StepResult::Finished,
        }
    }

    /// Drive the session to completion and summarize it.
    pub fn run(&mut self, operator: &mut dyn DispatchOperator) -> SessionReport {
        let mut report = SessionReport::default();
        loop {
            match self.step(operator) {
                StepResult::Treated(cycle) => {
                    if cycle.route.is_some() {
                        report.routes_computed += 1;
                    }
                    if cycle.allocated.is_some() {
                        report.allocations += 1;
                    }
                    report.treated.push(cycle.patient);
                }
                StepResult::Released(drain) => {
                    if drain.outcome == DrainOutcome::Released {
                        report.releases += 1;
                    }
                }
                StepResult::Finished => break,
            }
        }
        report
    }

    /// One treatment cycle: extract, route, allocate.
    ///
    /// Caller guarantees the queue is non-empty.
    fn treatment_cycle(&mut self, operator: &mut dyn DispatchOperator) -> CycleReport {
        let patient = self.queue.extract_max();
        self.cycles += 1;
        let cycle = self.cycles;

        self.event_log.log(Event::TreatmentStarted {
            cycle,
            name: patient.name().to_string(),
            urgency: patient.urgency(),
        });

        // Route query: failures skip the route but the cycle continues and
        // the allocation below still proceeds.
        let choice = operator.choose_route(&patient);
        let route = match self.graph.shortest_path(choice.src, choice.dest) {
            Ok(route) => {
                self.event_log.log(Event::RouteComputed {
                    cycle,
                    src: choice.src,
                    dest: choice.dest,
                    distance: route.distance(),
                    path: route.named(&self.graph),
                });
                Some(route)
            }
            Err(err) => {
                self.event_log.log(Event::RouteRejected {
                    cycle,
                    src: choice.src,
                    dest: choice.dest,
                    reason: err.to_string(),
                });
                None
            }
        };

        // Allocation: a failed allocation is reported and treated as not
        // having happened; the loop does not retry.
        let id = operator.choose_resource(&patient);
        let allocated = match self.resources.allocate(id) {
            Ok(()) => {
                self.event_log.log(Event::ResourceAllocated { cycle, id });
                Some(id)
            }
            Err(err) => {
                self.event_log.log(Event::AllocationRejected {
                    cycle,
                    id,
                    reason: err.to_string(),
                });
                None
            }
        };

        // Drain owes one step per cycle, successful allocation or not
        self.pending_releases += 1;

        CycleReport {
            patient,
            route,
            allocated,
        }
    }

    /// One drain step. Caller guarantees `pending_releases > 0`.
    fn drain_step(&mut self, operator: &mut dyn DispatchOperator) -> DrainReport {
        let id = operator.choose_release();
        let outcome = match self.resources.release(id) {
            Ok(ReleaseOutcome::Released) => {
                self.released += 1;
                self.event_log.log(Event::ResourceReleased { id });
                DrainOutcome::Released
            }
            Ok(ReleaseOutcome::AlreadyFree) => {
                self.event_log.log(Event::ReleaseRedundant { id });
                DrainOutcome::AlreadyFree
            }
            Err(err) => {
                self.event_log.log(Event::ReleaseRejected {
                    id,
                    reason: err.to_string(),
                });
                DrainOutcome::Invalid
            }
        };

        // The counter always advances, even for invalid IDs
        self.pending_releases -= 1;
        if self.pending_releases == 0 {
            self.finish();
            self.state = DispatchState::Done;
        }

        DrainReport { id, outcome }
    }

    fn finish(&mut self) {
        self.event_log.log(Event::DrainComplete {
            released: self.released,
        });
    }
}
