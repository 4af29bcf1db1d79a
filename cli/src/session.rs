//! Shared session driver.
//!
//! Drives a built [`Dispatcher`] through its dispatch and drain phases,
//! rendering each logged event as an operator message, then prints the
//! closing reports (doctor search, patient name sorting, volume forecast).

use triage_dispatch_core_rs::{
    forecast, sorted_names, DispatchOperator, Dispatcher, DoctorDirectory, Event, ForecastModel,
    Patient, TrainingConfig,
};

/// Run the dispatch and drain phases to completion, printing as we go.
pub fn run_dispatch(dispatcher: &mut Dispatcher, operator: &mut dyn DispatchOperator) {
    print_heap(dispatcher);

    // Skip over the intake admissions already logged at construction
    let mut cursor = dispatcher.events().len();

    println!("\nTreating patients:");
    while dispatcher.queue_len() > 0 {
        let _ = dispatcher.step(operator);
        cursor = print_new_events(dispatcher, cursor);
    }

    println!("\nRemaining resources not allocated:");
    print_available(dispatcher);

    if dispatcher.pending_releases() > 0 {
        println!("\nReleasing resources once patients are treated:");
    }
    while dispatcher.pending_releases() > 0 {
        let _ = dispatcher.step(operator);
        cursor = print_new_events(dispatcher, cursor);
    }

    // Finalizes an empty session (no cycles, nothing to drain)
    let _ = dispatcher.step(operator);
    print_new_events(dispatcher, cursor);

    println!("\nRemaining resources after release:");
    print_available(dispatcher);
}

/// Closing reports: doctor lookup, display sorting, forecast demo.
pub fn closing_reports(
    directory: &DoctorDirectory,
    doctor_search: Option<&str>,
    intake: &[Patient],
) {
    if let Some(name) = doctor_search {
        match directory.find_by_name(name) {
            Some(doctor) => {
                println!("\nDoctor found");
                println!("NAME: {}", doctor.name());
                println!("ID: {}", doctor.id());
            }
            None => println!("\nDoctor not found"),
        }
    }

    println!("\nPatient names before sorting:");
    for patient in intake {
        println!("  {}", patient.name());
    }
    println!("Patient names after sorting:");
    for name in sorted_names(intake) {
        println!("  {}", name);
    }

    let model = ForecastModel::train(
        &forecast::reference_observations(),
        &TrainingConfig::default(),
    );
    let predicted = model.predict(28.0, 65.0);
    println!("\nPredicted number of patients arriving: {:.2}", predicted);
}

fn print_heap(dispatcher: &Dispatcher) {
    println!("\nEmergency Room Heap:");
    for patient in dispatcher.waiting() {
        println!("Patient: {}, Urgency: {}", patient.name(), patient.urgency());
    }
}

fn print_available(dispatcher: &Dispatcher) {
    for id in dispatcher.resources().available_ids() {
        println!("{}", id);
    }
}

fn print_new_events(dispatcher: &Dispatcher, from: usize) -> usize {
    let events = dispatcher.events();
    for event in &events[from..] {
        println!("{}", render(event));
    }
    events.len()
}

fn render(event: &Event) -> String {
    match event {
        Event::PatientAdmitted { name, urgency } => {
            format!("Admitted patient: {}, Urgency: {}", name, urgency)
        }
        Event::TreatmentStarted {
            name, urgency, ..
        } => format!("\nTreating patient: {}, Urgency: {}", name, urgency),
        Event::RouteComputed {
            distance, path, ..
        } => format!(
            "Shortest path: {}\nShortest distance: {}",
            path.join(" -> "),
            distance
        ),
        Event::RouteRejected { reason, .. } => {
            format!("Invalid source or destination department: {}", reason)
        }
        Event::ResourceAllocated { id, .. } => format!("Resource {} allocated.", id),
        Event::AllocationRejected { reason, .. } => {
            format!("Resource not allocated: {}", reason)
        }
        Event::ResourceReleased { id } => format!("Resource {} released.", id),
        Event::ReleaseRedundant { id } => format!("Resource {} is already available.", id),
        Event::ReleaseRejected { reason, .. } => format!("Release refused: {}", reason),
        Event::DrainComplete { released } => {
            format!("Drain complete: {} resources freed.", released)
        }
    }
}
