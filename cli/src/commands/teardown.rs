//! `lease-action teardown` — release the lease after the job body ran.

use std::process::ExitCode;

use crate::app::AppContext;
use crate::application::services::teardown::teardown_lease;

/// Run `lease-action teardown`. Always exits successfully.
pub async fn run(app: &AppContext) -> ExitCode {
    let outcome = teardown_lease(&app.teardown, &app.runner, &app.actions, &app.reporter).await;
    super::finish(&outcome, &app.reporter)
}
