//! lk release builder library.
//!
//! This crate cross-compiles the lk program for a fixed matrix of
//! architectures and platforms, naming each artefact after its target and
//! the release version. It backs the `lk-release` CLI binary and can be
//! driven programmatically with a custom [`executor::CommandExecutor`].
//!
//! # Modules
//!
//! - [`builder`] - Build loop over the target matrix
//! - [`cli`] - Command-line argument definitions
//! - [`error`] - Error types and exit codes
//! - [`executor`] - Compiler process execution
//! - [`logging`] - Logger initialisation
//! - [`naming`] - Artefact filename policy
//! - [`output`] - Console messages
//! - [`pipeline`] - CLI-to-builder orchestration
//! - [`target`] - Architecture and platform matrix
//! - [`version`] - Release version token

pub mod builder;
pub mod cli;
pub mod error;
pub mod executor;
pub mod logging;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod target;
pub mod version;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;
