//! Typed domain error enum.
//!
//! Converts to `anyhow::Error` via the `?` operator.

use std::fmt;

use thiserror::Error;

/// How an external script process ended.
///
/// `None` means the process ended without an exit code (killed by a signal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptExit(pub Option<i32>);

impl fmt::Display for ScriptExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(code) => write!(f, "exit code {code}"),
            None => f.write_str("termination by signal"),
        }
    }
}

/// Errors raised while provisioning or releasing a lease.
#[derive(Debug, Error)]
pub enum LeaseError {
    #[error("Lease setup script failed with {0}")]
    SetupFailure(ScriptExit),

    #[error("Lease teardown script failed with {0}")]
    TeardownFailure(ScriptExit),

    #[error("Unexpected input: name or value for '{name}' contains the file command delimiter")]
    DelimiterCollision { name: String },
}
