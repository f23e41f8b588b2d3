//! Infrastructure implementation of the `StateStore` and `JobOutputs` ports
//! on top of the GitHub Actions runner environment, plus input loading.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::workflow::{append_file_command, stdout_command};
use crate::application::ports::{JobOutputs, StateStore};
use crate::domain::{LeaseInputs, RawInputs};

/// Prefix of the variables the runner exports for each action input.
const INPUT_PREFIX: &str = "INPUT_";
/// Prefix of the variables carrying state saved by the main step.
const STATE_PREFIX: &str = "STATE_";

/// Snapshot of the process environment as `(name, value)` pairs.
///
/// Variables whose name or value is not valid UTF-8 are skipped.
pub fn env_vars() -> impl Iterator<Item = (String, String)> {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
}

/// Load and validate the action inputs from `INPUT_*` variables.
///
/// # Errors
///
/// Returns an error if the inputs cannot be deserialised.
pub fn load_inputs(vars: impl IntoIterator<Item = (String, String)>) -> Result<LeaseInputs> {
    let raw: RawInputs = envy::prefixed(INPUT_PREFIX)
        .from_iter(vars)
        .context("reading action inputs")?;
    Ok(LeaseInputs::from(raw))
}

/// The runner's output and state channels for one step.
pub struct ActionsRuntime {
    output_file: Option<PathBuf>,
    state_file: Option<PathBuf>,
    saved_state: HashMap<String, String>,
}

impl ActionsRuntime {
    /// Build from the current process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(env_vars())
    }

    /// Build from an explicit set of variables (used in tests).
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut output_file = None;
        let mut state_file = None;
        let mut saved_state = HashMap::new();

        for (name, value) in vars {
            match name.as_str() {
                "GITHUB_OUTPUT" if !value.is_empty() => output_file = Some(PathBuf::from(value)),
                "GITHUB_STATE" if !value.is_empty() => state_file = Some(PathBuf::from(value)),
                _ => {
                    if let Some(key) = name.strip_prefix(STATE_PREFIX) {
                        saved_state.insert(key.to_string(), value);
                    }
                }
            }
        }

        Self {
            output_file,
            state_file,
            saved_state,
        }
    }
}

impl StateStore for ActionsRuntime {
    fn save_state(&self, name: &str, value: &str) -> Result<()> {
        match &self.state_file {
            Some(path) => append_file_command(path, name, value),
            None => {
                println!("{}", stdout_command("save-state", &[("name", name)], value));
                Ok(())
            }
        }
    }

    fn get_state(&self, name: &str) -> Option<String> {
        self.saved_state.get(name).cloned()
    }
}

impl JobOutputs for ActionsRuntime {
    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        match &self.output_file {
            Some(path) => append_file_command(path, name, value),
            None => {
                println!("{}", stdout_command("set-output", &[("name", name)], value));
                Ok(())
            }
        }
    }
}
