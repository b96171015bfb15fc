//! Cross-compilation orchestration for the release matrix.
//!
//! The [`Builder`] walks the target matrix in order, invokes the compiler
//! once per target with `GOOS`/`GOARCH` overrides, and stops at the first
//! failure. Artefacts produced before a failure are left on disk.

use crate::error::{ReleaseError, Result};
use crate::executor::{CommandExecutor, Invocation, exit_code_of};
use crate::naming::ArtefactName;
use crate::output::{failure_message, success_message, write_line};
use crate::target::{MATRIX_SIZE, Target, build_matrix};
use crate::version::Version;
use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, info};
use std::io::Write;

/// Compiler invoked when none is configured.
pub const DEFAULT_COMPILER: &str = "go";

/// Directory artefacts are written to when none is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "releases";

/// Environment variable selecting the target operating system.
pub const TARGET_OS_VAR: &str = "GOOS";

/// Environment variable selecting the target architecture.
pub const TARGET_ARCH_VAR: &str = "GOARCH";

/// Configuration for the build process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Compiler program to invoke.
    pub compiler: String,
    /// Directory receiving the artefacts.
    pub output_dir: Utf8PathBuf,
    /// Source tree to build from (None inherits the current directory).
    pub source_dir: Option<Utf8PathBuf>,
    /// Suppress per-target success messages.
    pub quiet: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            compiler: DEFAULT_COMPILER.to_owned(),
            output_dir: Utf8PathBuf::from(DEFAULT_OUTPUT_DIR),
            source_dir: None,
            quiet: false,
        }
    }
}

/// Result of building a single target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildResult {
    /// Target that was built.
    pub target: Target,
    /// Path the compiler was asked to write.
    pub artefact_path: Utf8PathBuf,
}

/// A build that would be run for a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedBuild {
    /// Target to build.
    pub target: Target,
    /// Invocation that builds it.
    pub invocation: Invocation,
}

/// Builder for compiling the release matrix.
pub struct Builder<'a> {
    config: BuildConfig,
    executor: &'a dyn CommandExecutor,
}

impl<'a> Builder<'a> {
    /// Create a new builder with the given configuration and executor.
    #[must_use]
    pub fn new(config: BuildConfig, executor: &'a dyn CommandExecutor) -> Self {
        Self { config, executor }
    }

    /// Return the builder configuration.
    #[must_use]
    pub const fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Compute the output path for a target.
    ///
    /// # Examples
    ///
    /// ```
    /// use lk_release::builder::{BuildConfig, Builder};
    /// use lk_release::executor::SystemCommandExecutor;
    /// use lk_release::target::{Arch, Platform, Target};
    /// use lk_release::version::Version;
    ///
    /// let builder = Builder::new(BuildConfig::default(), &SystemCommandExecutor);
    /// let path = builder.artefact_path(
    ///     Target::new(Arch::Amd64, Platform::Linux),
    ///     &Version::from("1.2.3"),
    /// );
    /// assert_eq!(path.file_name(), Some("lk-linux-amd64-v1.2.3"));
    /// ```
    #[must_use]
    pub fn artefact_path(&self, target: Target, version: &Version) -> Utf8PathBuf {
        let name = ArtefactName::new(target, version.clone());
        self.config.output_dir.join(name.filename())
    }

    /// Describe the compiler invocation for a target.
    #[must_use]
    pub fn invocation(&self, target: Target, version: &Version) -> Invocation {
        let output = self.artefact_path(target, version);
        Invocation {
            program: self.config.compiler.clone(),
            args: vec!["build".to_owned(), "-o".to_owned(), output.into_string()],
            env: vec![
                (
                    TARGET_OS_VAR.to_owned(),
                    target.platform().as_str().to_owned(),
                ),
                (TARGET_ARCH_VAR.to_owned(), target.arch().as_str().to_owned()),
            ],
            current_dir: self.config.source_dir.clone(),
        }
    }

    /// List the builds the matrix would run, in order, without running them.
    #[must_use]
    pub fn plan(&self, version: &Version) -> Vec<PlannedBuild> {
        build_matrix()
            .map(|target| PlannedBuild {
                target,
                invocation: self.invocation(target, version),
            })
            .collect()
    }

    /// Build a single target.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::BuildFailed`] if the compiler exits
    /// unsuccessfully, or the executor's error if it cannot be started.
    pub fn build_target(&self, target: Target, version: &Version) -> Result<BuildResult> {
        let invocation = self.invocation(target, version);
        debug!("building {target}: {invocation}");

        let status = self.executor.run(&invocation)?;
        if !status.success() {
            return Err(ReleaseError::BuildFailed {
                target,
                code: exit_code_of(status),
            });
        }

        Ok(BuildResult {
            target,
            artefact_path: self.artefact_path(target, version),
        })
    }

    /// Build every target in the matrix, stopping at the first failure.
    ///
    /// A success line is written to `stdout` after each target unless the
    /// builder is quiet; a failure line is always written before returning
    /// the error.
    ///
    /// # Errors
    ///
    /// Returns the first target's error; later targets are not attempted.
    pub fn build_all(&self, version: &Version, stdout: &mut dyn Write) -> Result<Vec<BuildResult>> {
        let mut results = Vec::with_capacity(MATRIX_SIZE);

        for target in build_matrix() {
            match self.build_target(target, version) {
                Ok(result) => {
                    if !self.config.quiet {
                        write_line(stdout, success_message(target));
                    }
                    results.push(result);
                }
                Err(err) => {
                    write_line(stdout, failure_message(target));
                    return Err(err);
                }
            }
        }

        info!(
            "built {} artefact(s) into {}",
            results.len(),
            self.config.output_dir
        );
        Ok(results)
    }
}

/// Create the output directory and any missing parents.
///
/// # Errors
///
/// Returns [`ReleaseError::OutputDirectory`] if the directory cannot be
/// created.
pub fn ensure_output_dir(path: &Utf8Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|source| ReleaseError::OutputDirectory {
        path: path.to_owned(),
        source,
    })
}
