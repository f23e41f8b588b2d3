//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::process::Output;

use anyhow::Result;

// ── Value Types ───────────────────────────────────────────────────────────────

/// A single external script call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptInvocation {
    /// Program to run, e.g. `"bash"`.
    pub program: String,
    /// Arguments, usually just the script path.
    pub args: Vec<String>,
    /// Variables added on top of the inherited environment.
    pub env: Vec<(String, String)>,
}

impl ScriptInvocation {
    /// Look up a variable in the added environment.
    #[must_use]
    pub fn env_var(&self, name: &str) -> Option<&str> {
        self.env
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

// ── Process Runner Port ───────────────────────────────────────────────────────

/// Abstracts script execution so services can be tested with a fake runner.
#[allow(async_fn_in_trait)]
pub trait ProcessRunner {
    /// Run the invocation to completion, forwarding its output to the job
    /// log as it arrives and capturing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on. A
    /// non-zero exit is NOT an error here; callers inspect `Output::status`.
    async fn run(&self, invocation: &ScriptInvocation) -> Result<Output>;
}

// ── State and Output Ports ────────────────────────────────────────────────────

/// Key/value store that survives from the setup phase to the teardown phase
/// of one job.
pub trait StateStore {
    /// Persist a value for the teardown phase.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be recorded.
    fn save_state(&self, name: &str, value: &str) -> Result<()>;
    /// Read a value persisted by the setup phase, `None` if never saved.
    fn get_state(&self, name: &str) -> Option<String>;
}

/// Values published for downstream steps of the job.
pub trait JobOutputs {
    /// Publish a job output.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be recorded.
    fn set_output(&self, name: &str, value: &str) -> Result<()>;
}

// ── Reporting Port ────────────────────────────────────────────────────────────

/// Abstracts job log reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait Reporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a non-fatal warning annotation.
    fn warn(&self, message: &str);
    /// Emit an error annotation.
    fn error(&self, message: &str);
    /// Open a collapsible log section; output until `end_group` lands in it.
    fn start_group(&self, title: &str);
    /// Close the section opened by `start_group`.
    fn end_group(&self);
}
