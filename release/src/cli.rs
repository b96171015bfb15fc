//! CLI argument definitions for the release builder.
//!
//! This module defines the command-line interface using clap. It is separated
//! from the main entrypoint to keep the binary small and focused on
//! orchestration.

use crate::builder::{BuildConfig, DEFAULT_COMPILER, DEFAULT_OUTPUT_DIR};
use crate::error::{ReleaseError, Result};
use crate::version::Version;
use camino::Utf8PathBuf;
use clap::Parser;

/// Cross-compile lk release binaries.
#[derive(Parser, Debug, Clone)]
#[command(name = "lk-release")]
#[command(version, about)]
#[command(long_about = concat!(
    "Cross-compile lk release binaries.\n\n",
    "Builds the program in the current directory once for every combination of ",
    "architecture (arm64, amd64) and platform (darwin, linux, windows), writing ",
    "each binary to releases/lk-<platform>-<arch>-v<version>, with an .exe ",
    "suffix for windows.\n\n",
    "The run stops at the first failed build and exits with the compiler's ",
    "exit code. Binaries built before the failure are kept.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Build every target for version 1.2.3:\n",
    "    $ lk-release 1.2.3\n\n",
    "  Create the output directory if it is missing:\n",
    "    $ lk-release --create-output-dir 1.2.3\n\n",
    "  Preview the compiler invocations:\n",
    "    $ lk-release --dry-run 1.2.3",
))]
pub struct Cli {
    /// Version embedded in every artefact filename.
    ///
    /// Taken verbatim, including a leading hyphen such as `-rc1`.
    #[arg(value_name = "VERSION", allow_hyphen_values = true)]
    pub release_version: Option<String>,

    /// Directory receiving the built binaries.
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: Utf8PathBuf,

    /// Create the output directory if it does not exist.
    #[arg(long)]
    pub create_output_dir: bool,

    /// Compiler program to invoke.
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_COMPILER)]
    pub compiler: String,

    /// Source tree to build [default: current directory].
    #[arg(short, long, value_name = "DIR")]
    pub source_dir: Option<Utf8PathBuf>,

    /// Show the planned builds and exit without running them.
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (repeatable: -v, -vv, -vvv).
    #[arg(
        short,
        long = "verbose",
        action = clap::ArgAction::Count,
        conflicts_with = "quiet"
    )]
    pub verbosity: u8,

    /// Suppress per-target success messages (failures still shown).
    #[arg(short, long, conflicts_with = "verbosity")]
    pub quiet: bool,
}

impl Cli {
    /// Return the requested version.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::MissingVersion`] when no version was given.
    ///
    /// # Examples
    ///
    /// ```
    /// use clap::Parser;
    /// use lk_release::cli::Cli;
    ///
    /// let cli = Cli::parse_from(["lk-release", "1.2.3"]);
    /// assert_eq!(cli.version()?.as_str(), "1.2.3");
    ///
    /// let missing = Cli::parse_from(["lk-release"]);
    /// assert!(missing.version().is_err());
    /// # Ok::<(), lk_release::error::ReleaseError>(())
    /// ```
    pub fn version(&self) -> Result<Version> {
        self.release_version
            .as_deref()
            .map(Version::from)
            .ok_or(ReleaseError::MissingVersion)
    }

    /// Build configuration derived from the parsed flags.
    #[must_use]
    pub fn build_config(&self) -> BuildConfig {
        BuildConfig {
            compiler: self.compiler.clone(),
            output_dir: self.output_dir.clone(),
            source_dir: self.source_dir.clone(),
            quiet: self.quiet,
        }
    }
}

impl Default for Cli {
    /// Creates a `Cli` with no version and every option at its default.
    ///
    /// # Examples
    ///
    /// ```
    /// use lk_release::cli::Cli;
    ///
    /// let cli = Cli::default();
    /// assert!(cli.release_version.is_none());
    /// assert_eq!(cli.compiler, "go");
    /// assert_eq!(cli.output_dir.as_str(), "releases");
    /// ```
    fn default() -> Self {
        Self {
            release_version: None,
            output_dir: Utf8PathBuf::from(DEFAULT_OUTPUT_DIR),
            create_output_dir: false,
            compiler: DEFAULT_COMPILER.to_owned(),
            source_dir: None,
            dry_run: false,
            verbosity: 0,
            quiet: false,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
