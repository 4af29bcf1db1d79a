//! Event logging for dispatch sessions.
//!
//! Every significant state change in the dispatch loop is recorded as a
//! typed [`Event`]: admissions, treatment starts, route results, and
//! allocation/release outcomes. The log replaces interleaved console
//! reporting and gives a session an auditable trace:
//! - Debugging (understand what happened, and in which cycle)
//! - Testing (assert on outcomes without capturing output)
//! - Display (the CLI renders events as operator messages)
//!
//! Rejection events carry a human-readable reason; the loop recovers from
//! every one of them and advances to the next cycle.

/// A dispatch session event.
///
/// Cycle numbers start at 1 and identify the treatment cycle the event
/// belongs to. Drain-phase events carry no cycle number; releases are not
/// bound to the cycle that allocated them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Patient entered the triage queue at intake
    PatientAdmitted { name: String, urgency: u32 },

    /// Most urgent patient extracted; treatment cycle begins
    TreatmentStarted {
        cycle: usize,
        name: String,
        urgency: u32,
    },

    /// Shortest route computed for this cycle
    RouteComputed {
        cycle: usize,
        src: usize,
        dest: usize,
        distance: u64,
        path: Vec<String>,
    },

    /// Route query skipped (invalid endpoint or unreachable destination)
    RouteRejected {
        cycle: usize,
        src: usize,
        dest: usize,
        reason: String,
    },

    /// Resource slot allocated for this cycle
    ResourceAllocated { cycle: usize, id: u32 },

    /// Allocation did not happen (invalid or unavailable ID)
    AllocationRejected {
        cycle: usize,
        id: u32,
        reason: String,
    },

    /// Held resource slot released during the drain phase
    ResourceReleased { id: u32 },

    /// Release of an already-free slot (tolerated, no state change)
    ReleaseRedundant { id: u32 },

    /// Release refused (ID outside the declared range)
    ReleaseRejected { id: u32, reason: String },

    /// Drain phase finished; session is done
    DrainComplete { released: usize },
}

impl Event {
    /// Short name of the event type
    pub fn kind(&self) -> &'static str {
        match self {
            Event::PatientAdmitted { .. } => "PatientAdmitted",
            Event::TreatmentStarted { .. } => "TreatmentStarted",
            Event::RouteComputed { .. } => "RouteComputed",
            Event::RouteRejected { .. } => "RouteRejected",
            Event::ResourceAllocated { .. } => "ResourceAllocated",
            Event::AllocationRejected { .. } => "AllocationRejected",
            Event::ResourceReleased { .. } => "ResourceReleased",
            Event::ReleaseRedundant { .. } => "ReleaseRedundant",
            Event::ReleaseRejected { .. } => "ReleaseRejected",
            Event::DrainComplete { .. } => "DrainComplete",
        }
    }

    /// Treatment cycle this event belongs to, if any
    pub fn cycle(&self) -> Option<usize> {
        match self {
            Event::TreatmentStarted { cycle, .. }
            | Event::RouteComputed { cycle, .. }
            | Event::RouteRejected { cycle, .. }
            | Event::ResourceAllocated { cycle, .. }
            | Event::AllocationRejected { cycle, .. } => Some(*cycle),
            _ => None,
        }
    }
}

/// Append-only log of session events.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// All events in the order they occurred
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of logged events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when nothing has been logged
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events of the given kind
    pub fn count_kind(&self, kind: &str) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_and_count() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.log(Event::PatientAdmitted {
            name: "A".to_string(),
            urgency: 5,
        });
        log.log(Event::ResourceAllocated { cycle: 1, id: 2 });
        log.log(Event::ResourceReleased { id: 2 });

        assert_eq!(log.len(), 3);
        assert_eq!(log.count_kind("ResourceAllocated"), 1);
        assert_eq!(log.count_kind("RouteComputed"), 0);
    }

    #[test]
    fn test_event_cycle() {
        let e = Event::TreatmentStarted {
            cycle: 3,
            name: "A".to_string(),
            urgency: 5,
        };
        assert_eq!(e.cycle(), Some(3));
        assert_eq!(e.kind(), "TreatmentStarted");

        let drain = Event::ResourceReleased { id: 1 };
        assert_eq!(drain.cycle(), None);
    }
}
