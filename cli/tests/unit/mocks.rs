//! Hand-written port mocks shared by the service tests.

#![allow(dead_code, clippy::expect_used)]

use std::collections::HashMap;
use std::process::{ExitStatus, Output};
use std::sync::Mutex;

use anyhow::Result;
use lease_action::application::ports::{
    JobOutputs, ProcessRunner, Reporter, ScriptInvocation, StateStore,
};
use lease_action::application::services::ScriptCommand;
use lease_action::application::services::setup::OUTPUT_FILE_VAR;

use crate::helpers::{exit_status, output};

pub fn script(path: &str) -> ScriptCommand {
    ScriptCommand {
        shell: "bash".into(),
        script: path.into(),
    }
}

// ── Mock: recording process runner ───────────────────────────────────────────

/// Records every invocation and answers with a canned result.
///
/// When `record` is set, it is written to the path named by
/// `GITHUB_OUTPUT_FILE` the way the provisioning script would.
pub struct FakeRunner {
    status: ExitStatus,
    record: Option<Vec<u8>>,
    spawn_error: Option<String>,
    calls: Mutex<Vec<ScriptInvocation>>,
}

impl FakeRunner {
    pub fn exiting(code: i32) -> Self {
        Self::with_status(exit_status(code))
    }

    pub fn with_status(status: ExitStatus) -> Self {
        Self {
            status,
            record: None,
            spawn_error: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_to_spawn(message: &str) -> Self {
        Self {
            spawn_error: Some(message.to_string()),
            ..Self::exiting(0)
        }
    }

    pub fn writing(self, record: &str) -> Self {
        self.writing_bytes(record.as_bytes())
    }

    pub fn writing_bytes(mut self, record: &[u8]) -> Self {
        self.record = Some(record.to_vec());
        self
    }

    pub fn calls(&self) -> Vec<ScriptInvocation> {
        self.calls.lock().expect("lock").clone()
    }
}

impl ProcessRunner for FakeRunner {
    async fn run(&self, invocation: &ScriptInvocation) -> Result<Output> {
        self.calls.lock().expect("lock").push(invocation.clone());
        if let Some(message) = &self.spawn_error {
            anyhow::bail!("{message}");
        }
        if let (Some(record), Some(path)) = (&self.record, invocation.env_var(OUTPUT_FILE_VAR)) {
            std::fs::write(path, record)?;
        }
        Ok(output(self.status, b"", b""))
    }
}

// ── Mock: in-memory runner channels ──────────────────────────────────────────

/// In-memory `StateStore` + `JobOutputs`.
#[derive(Default)]
pub struct MemoryActions {
    saved_state: Mutex<Vec<(String, String)>>,
    outputs: Mutex<Vec<(String, String)>>,
    prior_state: HashMap<String, String>,
}

impl MemoryActions {
    /// Store whose `get_state` answers from `state`, as a post step would see it.
    pub fn with_state(state: &[(&str, &str)]) -> Self {
        Self {
            prior_state: state
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn saved_state(&self) -> Vec<(String, String)> {
        self.saved_state.lock().expect("lock").clone()
    }

    pub fn saved(&self, name: &str) -> Option<String> {
        self.saved_state()
            .into_iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    pub fn outputs(&self) -> Vec<(String, String)> {
        self.outputs.lock().expect("lock").clone()
    }

    pub fn output(&self, name: &str) -> Option<String> {
        self.outputs()
            .into_iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }
}

impl StateStore for MemoryActions {
    fn save_state(&self, name: &str, value: &str) -> Result<()> {
        self.saved_state
            .lock()
            .expect("lock")
            .push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn get_state(&self, name: &str) -> Option<String> {
        self.prior_state.get(name).cloned()
    }
}

impl JobOutputs for MemoryActions {
    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        self.outputs
            .lock()
            .expect("lock")
            .push((name.to_string(), value.to_string()));
        Ok(())
    }
}

/// `JobOutputs` that always fails.
pub struct BrokenOutputs;

impl JobOutputs for BrokenOutputs {
    fn set_output(&self, _: &str, _: &str) -> Result<()> {
        anyhow::bail!("output file is read-only")
    }
}

// ── Mock: recording reporter ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Step(String),
    Success(String),
    Warn(String),
    Error(String),
    GroupStart(String),
    GroupEnd,
}

#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<Event>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().expect("lock").clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Warn(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Error(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Event) {
        self.events.lock().expect("lock").push(event);
    }
}

impl Reporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.push(Event::Step(message.to_string()));
    }

    fn success(&self, message: &str) {
        self.push(Event::Success(message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.push(Event::Warn(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.push(Event::Error(message.to_string()));
    }

    fn start_group(&self, title: &str) {
        self.push(Event::GroupStart(title.to_string()));
    }

    fn end_group(&self) {
        self.push(Event::GroupEnd);
    }
}
