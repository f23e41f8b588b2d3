//! CLI argument parsing with clap derive

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::app::{AppContext, ScriptFlags};
use crate::commands;

/// Provision and release a temporary network peer lease for a CI job
#[derive(Parser)]
#[command(
    name = "lease-action",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Interpreter used to run the lease scripts
    #[arg(long, global = true, env = "LEASE_SHELL", default_value = "bash")]
    pub shell: String,

    /// Script that acquires the lease
    #[arg(
        long,
        global = true,
        env = "LEASE_SETUP_SCRIPT",
        default_value = "scripts/setup-lease.sh"
    )]
    pub setup_script: String,

    /// Script that releases the lease
    #[arg(
        long,
        global = true,
        env = "LEASE_TEARDOWN_SCRIPT",
        default_value = "scripts/teardown-lease.sh"
    )]
    pub teardown_script: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Acquire a lease and publish its id and client IP
    Setup,

    /// Release the lease recorded by `setup` (never fails the job)
    Teardown,
}

impl Cli {
    /// Execute the CLI command.
    pub async fn run(self) -> ExitCode {
        let Cli {
            shell,
            setup_script,
            teardown_script,
            command,
        } = self;
        let app = AppContext::new(ScriptFlags {
            shell,
            setup_script,
            teardown_script,
        });
        match command {
            Command::Setup => commands::setup::run(&app).await,
            Command::Teardown => commands::teardown::run(&app).await,
        }
    }
}
