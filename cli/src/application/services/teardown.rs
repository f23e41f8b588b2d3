//! Application service — lease teardown use-case.
//!
//! Best effort: nothing here can fail the job.

use anyhow::Result;

use super::ScriptCommand;
use crate::application::ports::{ProcessRunner, Reporter, StateStore};
use crate::domain::error::{LeaseError, ScriptExit};
use crate::domain::{Outcome, PersistedLease};

/// Warning emitted when setup never recorded a lease.
pub const NO_LEASE_WARNING: &str = "No lease ID found in state, skipping lease teardown";

/// Release the lease recorded by the setup phase, if any.
///
/// Returns [`Outcome::Warned`] when there is nothing to release or the
/// cleanup script fails; never [`Outcome::Fatal`].
pub async fn teardown_lease(
    command: &ScriptCommand,
    runner: &impl ProcessRunner,
    state: &impl StateStore,
    reporter: &impl Reporter,
) -> Outcome {
    let Some(lease) = PersistedLease::from_state(|name| state.get_state(name)) else {
        return Outcome::Warned(NO_LEASE_WARNING.to_string());
    };

    match release(&lease, command, runner, reporter).await {
        Ok(()) => Outcome::Ok,
        Err(e) => Outcome::Warned(format!("Lease teardown failed: {e:#}")),
    }
}

async fn release(
    lease: &PersistedLease,
    command: &ScriptCommand,
    runner: &impl ProcessRunner,
    reporter: &impl Reporter,
) -> Result<()> {
    reporter.step(&format!("Releasing peer lease {}", lease.lease_id));
    reporter.start_group("Lease teardown script output");
    let output = runner.run(&command.invocation(lease.script_env())).await;
    reporter.end_group();
    let output = output?;

    if !output.status.success() {
        return Err(LeaseError::TeardownFailure(ScriptExit(output.status.code())).into());
    }

    reporter.success(&format!("Released peer lease {}", lease.lease_id));
    Ok(())
}
