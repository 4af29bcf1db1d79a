//! Triage dispatch CLI.
//!
//! Runs one dispatch session end to end. Two modes:
//!
//! - **Interactive** (no arguments): sequential operator prompts in the
//!   fixed order — departments, orientation, doctors, patient intake,
//!   then one route + resource prompt per treatment cycle and one release
//!   prompt per drain step, closing with doctor search, patient name
//!   sorting, and the volume forecast demo.
//! - **Scripted** (`triage-dispatch <scenario.json>`): the same flow with
//!   every answer supplied up front by a JSON scenario file.
//!
//! Exit codes: 0 on normal completion, 2 for malformed configuration or an
//! unreadable/invalid scenario file.

mod interactive;
mod scenario;
mod session;

use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let result = match args.next() {
        Some(path) => scenario::run_scripted(&path),
        None => interactive::run_interactive(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(2)
        }
    }
}
