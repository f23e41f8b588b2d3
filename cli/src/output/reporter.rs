//! `WorkflowReporter` — Presentation-layer implementation of `Reporter`.
//!
//! Plain lines go to the job log as-is; warnings and errors become
//! annotations via `::warning::` / `::error::`.

use crate::application::ports::Reporter;
use crate::infra::workflow::stdout_command;

/// Reporter writing GitHub workflow commands to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct WorkflowReporter;

impl Reporter for WorkflowReporter {
    fn step(&self, message: &str) {
        println!("{message}");
    }

    fn success(&self, message: &str) {
        println!("{message}");
    }

    fn warn(&self, message: &str) {
        println!("{}", stdout_command("warning", &[], message));
    }

    fn error(&self, message: &str) {
        println!("{}", stdout_command("error", &[], message));
    }

    fn start_group(&self, title: &str) {
        println!("{}", stdout_command("group", &[], title));
    }

    fn end_group(&self) {
        println!("::endgroup::");
    }
}
