//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution and the
//! GitHub Actions runner protocol (inputs, outputs, state).
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod actions;
pub mod command_runner;
pub mod workflow;
