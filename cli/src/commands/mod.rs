//! Command implementations

pub mod setup;
pub mod teardown;

use std::process::ExitCode;

use crate::application::ports::Reporter;
use crate::domain::Outcome;

/// Translate a phase outcome into job annotations and an exit code.
///
/// Only [`Outcome::Fatal`] fails the step.
pub fn finish(outcome: &Outcome, reporter: &impl Reporter) -> ExitCode {
    match outcome {
        Outcome::Ok => ExitCode::SUCCESS,
        Outcome::Warned(message) => {
            reporter.warn(message);
            ExitCode::SUCCESS
        }
        Outcome::Fatal(message) => {
            reporter.error(message);
            ExitCode::FAILURE
        }
    }
}
