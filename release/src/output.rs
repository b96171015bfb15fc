//! Console output for the release builder.
//!
//! Progress lines go to standard output through a `&mut dyn Write` handle so
//! callers and tests can capture them.

use crate::builder::PlannedBuild;
use crate::target::Target;
use crate::version::Version;
use std::fmt::Display;
use std::io::Write;

/// Usage line printed when the version argument is missing.
pub const USAGE: &str = "Usage: lk-release <version>";

/// Message printed after a target builds successfully.
///
/// # Examples
///
/// ```
/// use lk_release::output::success_message;
/// use lk_release::target::{Arch, Platform, Target};
///
/// let target = Target::new(Arch::Arm64, Platform::Darwin);
/// assert_eq!(success_message(target), "Successfully built darwin-arm64");
/// ```
#[must_use]
pub fn success_message(target: Target) -> String {
    format!("Successfully built {target}")
}

/// Message printed when a target fails to build.
#[must_use]
pub fn failure_message(target: Target) -> String {
    format!("Failed to build {target}")
}

/// Write the dry-run description of the planned builds.
pub fn write_plan(stdout: &mut dyn Write, version: &Version, plan: &[PlannedBuild]) {
    write_line(stdout, "Dry run - no builds will be run");
    write_line(stdout, "");
    write_line(stdout, format!("Version: {version}"));
    write_line(stdout, format!("Targets: {}", plan.len()));
    for build in plan {
        write_line(stdout, format!("  {}: {}", build.target, build.invocation));
        if let Some(dir) = &build.invocation.current_dir {
            write_line(stdout, format!("    (in {dir})"));
        }
    }
}

/// Write a line to the given handle.
pub fn write_line(out: &mut dyn Write, message: impl Display) {
    if writeln!(out, "{message}").is_err() {
        // Best-effort output; ignore write failures.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{BuildConfig, Builder};
    use crate::target::{Arch, Platform};
    use crate::test_utils::StubExecutor;
    use camino::Utf8PathBuf;

    #[test]
    fn failure_message_names_platform_then_arch() {
        let target = Target::new(Arch::Arm64, Platform::Windows);
        assert_eq!(failure_message(target), "Failed to build windows-arm64");
    }

    #[test]
    fn plan_lists_each_invocation() {
        let executor = StubExecutor::default();
        let config = BuildConfig {
            source_dir: Some(Utf8PathBuf::from("/src/lk")),
            ..BuildConfig::default()
        };
        let builder = Builder::new(config, &executor);
        let version = Version::from("0.4.0");
        let mut stdout = Vec::new();

        write_plan(&mut stdout, &version, &builder.plan(&version));

        let text = String::from_utf8(stdout).expect("stdout was not UTF-8");
        assert!(text.contains("Version: 0.4.0"));
        assert!(text.contains("Targets: 6"));
        assert!(text.contains(
            "  darwin-arm64: GOOS=darwin GOARCH=arm64 go build -o releases/lk-darwin-arm64-v0.4.0"
        ));
        assert!(text.contains("releases/lk-windows-amd64-v0.4.0.exe"));
        assert_eq!(text.matches("(in /src/lk)").count(), 6);
    }
}
