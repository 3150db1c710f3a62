//! Core functionality shared across all Salut components.
//!
//! This crate contains the greeting formatter itself along with the
//! configuration handling and diagnostics used by the CLI.

pub mod config;
pub mod doctor;
pub mod greet;
pub mod test_support;
