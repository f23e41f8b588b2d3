//! Domain layer — pure types, parsing, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::env`.
//! All functions are synchronous and take data in, returning data out.

pub mod error;
pub mod inputs;
pub mod lease;
pub mod outcome;

pub use error::{LeaseError, ScriptExit};
pub use inputs::{LeaseInputs, RawInputs};
pub use lease::{OutputKey, PersistedLease, parse_output_record, persisted_config, state_key};
pub use outcome::Outcome;
