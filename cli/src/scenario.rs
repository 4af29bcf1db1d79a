//! Scripted mode: the whole session described by one JSON file.
//!
//! A scenario supplies every answer the interactive prompts would have
//! asked for. Missing per-cycle answers fall back to out-of-range
//! sentinels, so a short script still runs the session to completion.

use std::collections::VecDeque;
use std::error::Error;
use std::fs;

use serde::{Deserialize, Serialize};
use triage_dispatch_core_rs::{
    DispatchConfig, DispatchOperator, Dispatcher, Doctor, DoctorDirectory, Orientation, Patient,
    RouteChoice,
};

use crate::session;

const RESOURCE_ID_RANGE: (u32, u32) = (1, 10);

/// One treatment cycle's worth of operator answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleInput {
    pub src: usize,
    pub dest: usize,
    pub resource: u32,
}

/// Full session script.
#[derive(Debug, Serialize, Deserialize)]
pub struct Scenario {
    pub departments: Vec<String>,
    #[serde(default)]
    pub orientation: Option<Orientation>,
    #[serde(default)]
    pub doctors: Vec<Doctor>,
    pub patients: Vec<Patient>,
    /// Defaults to the intake size when omitted.
    #[serde(default)]
    pub queue_capacity: Option<usize>,
    #[serde(default)]
    pub cycles: Vec<CycleInput>,
    #[serde(default)]
    pub releases: Vec<u32>,
    #[serde(default)]
    pub doctor_search: Option<String>,
}

pub fn run_scripted(path: &str) -> Result<(), Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let scenario: Scenario = serde_json::from_str(&text)?;

    let intake = scenario.patients.clone();
    let config = DispatchConfig {
        department_names: scenario.departments,
        orientation: scenario.orientation,
        queue_capacity: scenario.queue_capacity.unwrap_or(intake.len()).max(1),
        resource_id_range: RESOURCE_ID_RANGE,
        patients: intake.clone(),
    };
    let mut dispatcher = Dispatcher::new(config)?;

    let directory = DoctorDirectory::from_roster(scenario.doctors);
    let mut operator = ScriptedOperator::new(scenario.cycles, scenario.releases);

    session::run_dispatch(&mut dispatcher, &mut operator);
    session::closing_reports(&directory, scenario.doctor_search.as_deref(), &intake);

    Ok(())
}

/// Replays scripted answers in order.
///
/// `choose_route` and `choose_resource` are called once each per cycle,
/// so one [`CycleInput`] covers both: the resource ID is stashed when the
/// route is taken and handed out on the following call.
struct ScriptedOperator {
    cycles: VecDeque<CycleInput>,
    releases: VecDeque<u32>,
    pending_resource: Option<u32>,
}

impl ScriptedOperator {
    fn new(cycles: Vec<CycleInput>, releases: Vec<u32>) -> Self {
        Self {
            cycles: cycles.into(),
            releases: releases.into(),
            pending_resource: None,
        }
    }
}

impl DispatchOperator for ScriptedOperator {
    fn choose_route(&mut self, _patient: &Patient) -> RouteChoice {
        match self.cycles.pop_front() {
            Some(cycle) => {
                self.pending_resource = Some(cycle.resource);
                RouteChoice {
                    src: cycle.src,
                    dest: cycle.dest,
                }
            }
            None => {
                self.pending_resource = None;
                RouteChoice {
                    src: usize::MAX,
                    dest: usize::MAX,
                }
            }
        }
    }

    fn choose_resource(&mut self, _patient: &Patient) -> u32 {
        self.pending_resource.take().unwrap_or(u32::MAX)
    }

    fn choose_release(&mut self) -> u32 {
        self.releases.pop_front().unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_parses_with_defaults() {
        let json = r#"{
            "departments": ["ER", "Radiology", "Surgery", "ICU", "Pharmacy"],
            "orientation": "directed",
            "patients": [
                {"name": "Asha", "urgency": 7},
                {"name": "Bruno", "urgency": 4}
            ],
            "cycles": [
                {"src": 0, "dest": 3, "resource": 1},
                {"src": 1, "dest": 4, "resource": 2}
            ],
            "releases": [1, 2]
        }"#;

        let scenario: Scenario = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.departments.len(), 5);
        assert_eq!(scenario.orientation, Some(Orientation::Directed));
        assert!(scenario.doctors.is_empty());
        assert_eq!(scenario.queue_capacity, None);
        assert_eq!(scenario.cycles.len(), 2);
        assert_eq!(scenario.doctor_search, None);
    }

    #[test]
    fn scripted_operator_pairs_route_and_resource() {
        let mut operator = ScriptedOperator::new(
            vec![CycleInput {
                src: 0,
                dest: 3,
                resource: 5,
            }],
            vec![5],
        );

        let patient = Patient::new("Asha", 7);
        let choice = operator.choose_route(&patient);
        assert_eq!((choice.src, choice.dest), (0, 3));
        assert_eq!(operator.choose_resource(&patient), 5);

        // Script exhausted: sentinels from here on
        let choice = operator.choose_route(&patient);
        assert_eq!(choice.src, usize::MAX);
        assert_eq!(operator.choose_resource(&patient), u32::MAX);
        assert_eq!(operator.choose_release(), 5);
        assert_eq!(operator.choose_release(), u32::MAX);
    }
}
