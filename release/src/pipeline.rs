//! Release pipeline orchestration.
//!
//! Ties the parsed CLI, the builder and the console output together, and
//! converts the outcome into a process exit code.

use crate::builder::{BuildResult, Builder, ensure_output_dir};
use crate::cli::Cli;
use crate::error::{ReleaseError, Result};
use crate::executor::CommandExecutor;
use crate::output::{USAGE, write_plan, write_line};
use log::{debug, warn};
use std::io::Write;

/// Run a release build for the parsed CLI.
///
/// Returns the per-target results, or an empty list for a dry run.
///
/// # Errors
///
/// Returns [`ReleaseError::MissingVersion`] before any build when no version
/// was given, [`ReleaseError::OutputDirectory`] if the output directory
/// cannot be created, and otherwise the first target failure.
pub fn run(
    cli: &Cli,
    executor: &dyn CommandExecutor,
    stdout: &mut dyn Write,
) -> Result<Vec<BuildResult>> {
    let version = cli.version()?;
    let builder = Builder::new(cli.build_config(), executor);

    if cli.dry_run {
        write_plan(stdout, &version, &builder.plan(&version));
        return Ok(Vec::new());
    }

    let output_dir = &builder.config().output_dir;
    if cli.create_output_dir {
        debug!("ensuring output directory {output_dir} exists");
        ensure_output_dir(output_dir)?;
    } else if !output_dir.is_dir() {
        warn!("output directory {output_dir} does not exist; the compiler may fail to write");
    }

    builder.build_all(&version, stdout)
}

/// Convert a run result into an exit code, reporting errors as needed.
///
/// A missing version prints the usage line to `stdout`. Target failures have
/// already been reported by the builder; their exit code is propagated.
/// Other errors are written to `stderr`.
pub fn exit_code_for_run_result(
    result: &Result<Vec<BuildResult>>,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> i32 {
    match result {
        Ok(_) => 0,
        Err(err @ ReleaseError::MissingVersion) => {
            write_line(stdout, USAGE);
            err.exit_code()
        }
        Err(err @ ReleaseError::BuildFailed { .. }) => err.exit_code(),
        Err(err) => {
            write_line(stderr, err);
            err.exit_code()
        }
    }
}
