//! Lease action - temporary network peer leases for CI jobs

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lease_action::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr so stdout carries only workflow commands.
    let default_level = if std::env::var("RUNNER_DEBUG").is_ok_and(|v| v == "1") {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    Cli::parse().run().await
}
