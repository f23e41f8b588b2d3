//! Phase outcome returned by the setup and teardown services.

/// Result of running one phase of the action.
///
/// Services never fail the job themselves; the command layer maps the
/// outcome onto workflow commands and the process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Phase completed.
    Ok,
    /// Phase failed; the job must fail with this message.
    Fatal(String),
    /// Phase completed with a problem worth surfacing; the job continues.
    Warned(String),
}
