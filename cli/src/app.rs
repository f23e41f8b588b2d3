//! Application context — unified state passed to every command handler.
//!
//! `AppContext` bundles the production adapters and the script locations so
//! command handlers stay free of construction logic.

use crate::application::services::ScriptCommand;
use crate::infra::actions::ActionsRuntime;
use crate::infra::command_runner::TokioProcessRunner;
use crate::output::WorkflowReporter;

/// Locations of the external lease scripts.
pub struct ScriptFlags {
    /// Interpreter used to run both scripts.
    pub shell: String,
    /// Provisioning script.
    pub setup_script: String,
    /// Cleanup script.
    pub teardown_script: String,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Script process runner.
    pub runner: TokioProcessRunner,
    /// Runner output/state channels.
    pub actions: ActionsRuntime,
    /// Job log reporter.
    pub reporter: WorkflowReporter,
    /// Provisioning command.
    pub setup: ScriptCommand,
    /// Cleanup command.
    pub teardown: ScriptCommand,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags and the process
    /// environment.
    #[must_use]
    pub fn new(flags: ScriptFlags) -> Self {
        Self {
            runner: TokioProcessRunner,
            actions: ActionsRuntime::from_env(),
            reporter: WorkflowReporter,
            setup: ScriptCommand {
                shell: flags.shell.clone(),
                script: flags.setup_script,
            },
            teardown: ScriptCommand {
                shell: flags.shell,
                script: flags.teardown_script,
            },
        }
    }
}
