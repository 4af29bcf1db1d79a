//! Interactive mode: sequential stdin prompts.
//!
//! Structural answers (counts, capacities, names) are re-prompted until
//! they parse. Per-cycle answers are forwarded as given; unparseable ones
//! become out-of-range sentinels, which the dispatcher tolerates and
//! reports instead of retrying.

use std::error::Error;
use std::io::{self, BufRead, Write};

use triage_dispatch_core_rs::{
    DispatchConfig, DispatchOperator, Dispatcher, Doctor, DoctorDirectory, Orientation, Patient,
    RouteChoice,
};

use crate::session;

/// Reference pool of shared treatment resources (beds, machines).
const RESOURCE_ID_RANGE: (u32, u32) = (1, 10);

pub fn run_interactive() -> Result<(), Box<dyn Error>> {
    let num_departments = read_count("Enter the number of departments: ")?;
    let mut department_names = Vec::with_capacity(num_departments);
    for i in 0..num_departments {
        department_names.push(read_name(&format!("Enter the name of department {}: ", i))?);
    }

    let answer = read_line("Enter 1 for a directed graph, 2 for undirected: ")?;
    let orientation = match answer.as_str() {
        "1" => Some(Orientation::Directed),
        "2" => Some(Orientation::Undirected),
        _ => {
            println!("Unrecognized choice; the route map will have no corridors.");
            None
        }
    };

    let num_doctors = read_count("Enter the number of doctors: ")?;
    let mut directory = DoctorDirectory::new();
    for i in 0..num_doctors {
        let id = read_count(&format!("Enter the ID of doctor {}: ", i + 1))? as u32;
        let name = read_name(&format!("Enter the name of doctor {}: ", i + 1))?;
        directory.add(Doctor::new(id, name));
    }

    let queue_capacity = read_count("Enter the capacity of the emergency room: ")?;
    let mut patients = Vec::with_capacity(queue_capacity);
    for i in 0..queue_capacity {
        let name = read_name(&format!("Enter the name of patient {}: ", i + 1))?;
        let urgency = read_count(&format!("Enter the urgency of patient {}: ", i + 1))? as u32;
        patients.push(Patient::new(name, urgency));
    }

    let config = DispatchConfig {
        department_names,
        orientation,
        queue_capacity: queue_capacity.max(1),
        resource_id_range: RESOURCE_ID_RANGE,
        patients: patients.clone(),
    };
    let mut dispatcher = Dispatcher::new(config)?;
    let mut operator = InteractiveOperator;

    session::run_dispatch(&mut dispatcher, &mut operator);

    let search = read_name("\nEnter the name of the doctor to search for: ")?;
    session::closing_reports(&directory, Some(&search), &patients);

    Ok(())
}

/// Operator answering each cycle's prompts from stdin.
///
/// Read failures (closed stdin) and unparseable numbers collapse to
/// sentinels; the engine rejects those like any other bad answer, so the
/// session still terminates.
struct InteractiveOperator;

impl DispatchOperator for InteractiveOperator {
    fn choose_route(&mut self, patient: &Patient) -> RouteChoice {
        println!("Choosing a route for {}.", patient.name());
        let src = read_index_or_sentinel("Enter the source department index: ");
        let dest = read_index_or_sentinel("Enter the destination department index: ");
        RouteChoice { src, dest }
    }

    fn choose_resource(&mut self, patient: &Patient) -> u32 {
        read_id_or_sentinel(&format!(
            "Enter the resource ID to allocate for {}: ",
            patient.name()
        ))
    }

    fn choose_release(&mut self) -> u32 {
        read_id_or_sentinel("Enter the resource ID to release: ")
    }
}

// ============================================================
// Prompt helpers
// ============================================================

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before the session was configured",
        ));
    }
    Ok(line.trim().to_string())
}

fn read_name(prompt: &str) -> io::Result<String> {
    loop {
        let line = read_line(prompt)?;
        if !line.is_empty() {
            return Ok(line);
        }
    }
}

fn read_count(prompt: &str) -> io::Result<usize> {
    loop {
        match read_line(prompt)?.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Please enter a whole number."),
        }
    }
}

fn read_index_or_sentinel(prompt: &str) -> usize {
    match read_line(prompt) {
        Ok(line) => line.parse().unwrap_or(usize::MAX),
        Err(_) => usize::MAX,
    }
}

fn read_id_or_sentinel(prompt: &str) -> u32 {
    match read_line(prompt) {
        Ok(line) => line.parse().unwrap_or(u32::MAX),
        Err(_) => u32::MAX,
    }
}
