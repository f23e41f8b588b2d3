//! `lease-action setup` — acquire a lease before the job body runs.

use std::process::ExitCode;

use crate::app::AppContext;
use crate::application::services::setup::setup_lease;
use crate::domain::Outcome;
use crate::infra::actions::{env_vars, load_inputs};

/// Run `lease-action setup`.
pub async fn run(app: &AppContext) -> ExitCode {
    let outcome = match load_inputs(env_vars()) {
        Ok(inputs) => {
            setup_lease(
                &inputs,
                &app.setup,
                &app.runner,
                &app.actions,
                &app.actions,
                &app.reporter,
            )
            .await
        }
        Err(e) => Outcome::Fatal(format!("{e:#}")),
    };
    super::finish(&outcome, &app.reporter)
}
