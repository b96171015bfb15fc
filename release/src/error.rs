//! Error types for the release builder.
//!
//! Each variant maps onto a process exit code via
//! [`ReleaseError::exit_code`], so `main` can terminate with the status the
//! failure calls for.

use crate::target::Target;
use camino::Utf8PathBuf;
use std::io;
use thiserror::Error;

/// Exit code used when the version argument is missing.
pub const USAGE_EXIT_CODE: i32 = 1;

/// Exit code used when the compiler executable cannot be found.
pub const COMMAND_NOT_FOUND_EXIT_CODE: i32 = 127;

/// Exit code used when the compiler exists but cannot be executed.
pub const NOT_EXECUTABLE_EXIT_CODE: i32 = 126;

/// Errors that can occur while building a release.
#[derive(Debug, Error)]
pub enum ReleaseError {
    /// No version argument was supplied.
    #[error("missing required <version> argument")]
    MissingVersion,

    /// The compiler exited unsuccessfully for a target.
    #[error("build failed for {target} with exit code {code}")]
    BuildFailed {
        /// Target whose build failed.
        target: Target,
        /// Exit code reported by the compiler.
        code: i32,
    },

    /// The compiler process could not be started.
    #[error("failed to run {program}: {source}")]
    CompilerSpawn {
        /// Program that was invoked.
        program: String,
        /// The underlying spawn error.
        #[source]
        source: io::Error,
    },

    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    OutputDirectory {
        /// Directory that could not be created.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Test stub received an unexpected or mismatched invocation.
    #[cfg(any(test, feature = "test-support"))]
    #[error("stub mismatch: {message}")]
    StubMismatch {
        /// Description of what was expected versus what was received.
        message: String,
    },
}

impl ReleaseError {
    /// Return the process exit code for this error.
    ///
    /// Build failures propagate the compiler's own exit code. Spawn failures
    /// follow the shell conventions of 127 (not found) and 126 (not
    /// executable).
    ///
    /// # Examples
    ///
    /// ```
    /// use lk_release::error::ReleaseError;
    /// use lk_release::target::{Arch, Platform, Target};
    ///
    /// let err = ReleaseError::BuildFailed {
    ///     target: Target::new(Arch::Arm64, Platform::Linux),
    ///     code: 2,
    /// };
    /// assert_eq!(err.exit_code(), 2);
    /// assert_eq!(ReleaseError::MissingVersion.exit_code(), 1);
    /// ```
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingVersion => USAGE_EXIT_CODE,
            Self::BuildFailed { code, .. } => *code,
            Self::CompilerSpawn { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => COMMAND_NOT_FOUND_EXIT_CODE,
                io::ErrorKind::PermissionDenied => NOT_EXECUTABLE_EXIT_CODE,
                _ => 1,
            },
            Self::OutputDirectory { .. } => 1,
            #[cfg(any(test, feature = "test-support"))]
            Self::StubMismatch { .. } => 1,
        }
    }
}

/// Result type alias using [`ReleaseError`].
pub type Result<T> = std::result::Result<T, ReleaseError>;
