//! Application service — lease setup use-case.
//!
//! Runs the provisioning script, then republishes the lease metadata it
//! wrote as job outputs and persisted state for the teardown phase.

use anyhow::{Context, Result};

use super::ScriptCommand;
use crate::application::ports::{JobOutputs, ProcessRunner, Reporter, StateStore};
use crate::domain::error::{LeaseError, ScriptExit};
use crate::domain::lease::{OutputKey, parse_output_record, persisted_config};
use crate::domain::{LeaseInputs, Outcome};

/// Variable naming the file the provisioning script writes `KEY=VALUE`
/// lines to.
pub const OUTPUT_FILE_VAR: &str = "GITHUB_OUTPUT_FILE";

/// File name of the script output inside the scratch directory.
const OUTPUT_FILE_NAME: &str = "lease-output";

/// Acquire a lease.
///
/// Any failure is fatal for the job and comes back as [`Outcome::Fatal`].
pub async fn setup_lease(
    inputs: &LeaseInputs,
    command: &ScriptCommand,
    runner: &impl ProcessRunner,
    state: &impl StateStore,
    outputs: &impl JobOutputs,
    reporter: &impl Reporter,
) -> Outcome {
    match provision(inputs, command, runner, state, outputs, reporter).await {
        Ok(()) => Outcome::Ok,
        Err(e) => Outcome::Fatal(format!("{e:#}")),
    }
}

async fn provision(
    inputs: &LeaseInputs,
    command: &ScriptCommand,
    runner: &impl ProcessRunner,
    state: &impl StateStore,
    outputs: &impl JobOutputs,
    reporter: &impl Reporter,
) -> Result<()> {
    // The file is not pre-created: it exists only if the script wrote it.
    let scratch = tempfile::tempdir().context("creating scratch directory for lease output")?;
    let output_file = scratch.path().join(OUTPUT_FILE_NAME);

    let mut env = inputs.script_env();
    env.push((OUTPUT_FILE_VAR.into(), output_file.display().to_string()));

    reporter.step(&format!(
        "Requesting peer lease from {} (ttl {})",
        inputs.peer_issuer_url, inputs.ttl_seconds
    ));
    reporter.start_group("Lease setup script output");
    let output = runner.run(&command.invocation(env)).await;
    reporter.end_group();
    let output = output?;

    if !output.status.success() {
        return Err(LeaseError::SetupFailure(ScriptExit(output.status.code())).into());
    }

    // Decoded lossily: the lease exists now and its id must reach the state.
    let entries = if output_file.exists() {
        let bytes = std::fs::read(&output_file)
            .with_context(|| format!("reading lease output {}", output_file.display()))?;
        parse_output_record(&String::from_utf8_lossy(&bytes))
    } else {
        tracing::debug!(path = %output_file.display(), "setup script wrote no output file");
        Vec::new()
    };

    let mut lease_id = None;
    for (key, value) in &entries {
        let name = key.output_name();
        state
            .save_state(name, value)
            .with_context(|| format!("saving state {name}"))?;
        outputs
            .set_output(name, value)
            .with_context(|| format!("setting output {name}"))?;
        if *key == OutputKey::LeaseId {
            lease_id = Some(value.as_str());
        }
    }

    for (name, value) in persisted_config(inputs) {
        state
            .save_state(name, value)
            .with_context(|| format!("saving state {name}"))?;
    }

    match lease_id {
        Some(id) => reporter.success(&format!("Acquired peer lease {id}")),
        None => reporter.step("Setup script reported no lease metadata"),
    }
    Ok(())
}
