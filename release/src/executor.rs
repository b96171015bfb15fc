//! Compiler process execution.
//!
//! The builder never spawns processes directly; it hands an [`Invocation`]
//! to a [`CommandExecutor`]. Production code uses
//! [`SystemCommandExecutor`], while tests substitute a stub.

use crate::error::{ReleaseError, Result};
use camino::Utf8PathBuf;
use std::fmt;
use std::process::{Command, ExitStatus};

/// A fully-described compiler invocation.
///
/// Displays as a shell-style command line with the environment overrides
/// first.
///
/// # Examples
///
/// ```
/// use lk_release::executor::Invocation;
///
/// let invocation = Invocation {
///     program: "go".to_owned(),
///     args: vec!["build".to_owned()],
///     env: vec![("GOOS".to_owned(), "linux".to_owned())],
///     current_dir: None,
/// };
/// assert_eq!(invocation.to_string(), "GOOS=linux go build");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to execute.
    pub program: String,
    /// Arguments passed to the program.
    pub args: Vec<String>,
    /// Environment overrides applied on top of the inherited environment.
    pub env: Vec<(String, String)>,
    /// Working directory, or `None` to inherit the current directory.
    pub current_dir: Option<Utf8PathBuf>,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.env {
            write!(f, "{key}={value} ")?;
        }
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Abstraction for running external commands.
pub trait CommandExecutor {
    /// Runs the invocation to completion and returns its exit status.
    ///
    /// The child's standard streams are inherited; only the terminal status
    /// is reported back.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::CompilerSpawn`] if the process cannot be
    /// started.
    fn run(&self, invocation: &Invocation) -> Result<ExitStatus>;
}

/// Executes commands on the host system.
///
/// # Examples
///
/// ```no_run
/// use lk_release::executor::{CommandExecutor, Invocation, SystemCommandExecutor};
///
/// let invocation = Invocation {
///     program: "go".to_owned(),
///     args: vec!["version".to_owned()],
///     env: Vec::new(),
///     current_dir: None,
/// };
/// let status = SystemCommandExecutor.run(&invocation)?;
/// assert!(status.success());
/// # Ok::<(), lk_release::error::ReleaseError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandExecutor;

impl CommandExecutor for SystemCommandExecutor {
    fn run(&self, invocation: &Invocation) -> Result<ExitStatus> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        cmd.envs(invocation.env.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        if let Some(dir) = &invocation.current_dir {
            cmd.current_dir(dir);
        }

        cmd.status().map_err(|source| ReleaseError::CompilerSpawn {
            program: invocation.program.clone(),
            source,
        })
    }
}

/// Convert an exit status into a process exit code.
///
/// A process terminated by a signal has no exit code and maps to `1`.
#[must_use]
pub fn exit_code_of(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
