//! Application services — one per action phase.

pub mod setup;
pub mod teardown;

use crate::application::ports::ScriptInvocation;

/// How to launch one of the external lease scripts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptCommand {
    /// Interpreter, e.g. `"bash"`.
    pub shell: String,
    /// Path to the script, passed as the interpreter's only argument.
    pub script: String,
}

impl ScriptCommand {
    /// Build an invocation of this script with the given extra environment.
    #[must_use]
    pub fn invocation(&self, env: Vec<(String, String)>) -> ScriptInvocation {
        ScriptInvocation {
            program: self.shell.clone(),
            args: vec![self.script.clone()],
            env,
        }
    }
}
