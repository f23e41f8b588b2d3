//! Application layer — port trait definitions and use-case orchestration.
//!
//! Services depend on `crate::domain` and the ports — never on `crate::infra`,
//! `crate::commands`, or `crate::output`.

pub mod ports;
pub mod services;

pub use ports::{JobOutputs, ProcessRunner, Reporter, ScriptInvocation, StateStore};
