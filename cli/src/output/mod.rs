//! Output formatting module — job log lines as workflow commands.

pub mod reporter;

pub use reporter::WorkflowReporter;
