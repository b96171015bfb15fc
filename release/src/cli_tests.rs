//! Tests for release CLI parsing and default behaviours.

use super::*;
use rstest::rstest;

#[test]
fn cli_parses_defaults() {
    let cli = Cli::parse_from(["lk-release"]);
    assert!(cli.release_version.is_none());
    assert_eq!(cli.output_dir, Utf8PathBuf::from("releases"));
    assert!(!cli.create_output_dir);
    assert_eq!(cli.compiler, "go");
    assert!(cli.source_dir.is_none());
    assert!(!cli.dry_run);
    assert_eq!(cli.verbosity, 0);
    assert!(!cli.quiet);
}

#[test]
fn parsed_defaults_match_default_impl() {
    let parsed = Cli::parse_from(["lk-release"]);
    assert_eq!(parsed.build_config(), Cli::default().build_config());
}

#[test]
fn cli_parses_version_verbatim() {
    let cli = Cli::parse_from(["lk-release", "1.2.3-rc.1"]);
    let version = cli.version().expect("expected version to be present");
    assert_eq!(version.as_str(), "1.2.3-rc.1");
}

#[test]
fn missing_version_is_an_error() {
    let cli = Cli::parse_from(["lk-release", "--dry-run"]);
    assert!(matches!(cli.version(), Err(ReleaseError::MissingVersion)));
}

#[test]
fn cli_parses_build_options() {
    let cli = Cli::parse_from([
        "lk-release",
        "--output-dir",
        "dist",
        "--create-output-dir",
        "--compiler",
        "/usr/local/go/bin/go",
        "--source-dir",
        "/src/lk",
        "-q",
        "2.0.0",
    ]);

    let config = cli.build_config();
    assert_eq!(config.output_dir, Utf8PathBuf::from("dist"));
    assert_eq!(config.compiler, "/usr/local/go/bin/go");
    assert_eq!(config.source_dir, Some(Utf8PathBuf::from("/src/lk")));
    assert!(config.quiet);
    assert!(cli.create_output_dir);
}

#[rstest]
#[case::single(&["lk-release", "-v", "1.0"], 1)]
#[case::double(&["lk-release", "-vv", "1.0"], 2)]
#[case::long(&["lk-release", "--verbose", "--verbose", "--verbose", "1.0"], 3)]
fn cli_counts_verbosity(#[case] args: &[&str], #[case] expected: u8) {
    let cli = Cli::parse_from(args.iter().copied());
    assert_eq!(cli.verbosity, expected);
}

#[test]
fn quiet_conflicts_with_verbose() {
    let result = Cli::try_parse_from(["lk-release", "-q", "-v", "1.0"]);
    assert!(result.is_err());
}

#[test]
fn extra_positional_is_rejected() {
    let result = Cli::try_parse_from(["lk-release", "1.0", "2.0"]);
    assert!(result.is_err());
}

#[rstest]
#[case::short_prefix("-rc1")]
#[case::long_prefix("--nightly")]
#[case::hyphenated("-1.2.3")]
fn version_may_start_with_hyphen(#[case] raw: &str) {
    let cli = Cli::try_parse_from(["lk-release", raw]).expect("expected version to parse");
    assert_eq!(cli.release_version.as_deref(), Some(raw));
}

#[test]
fn known_flags_still_win_over_hyphen_versions() {
    let cli = Cli::parse_from(["lk-release", "-v", "-rc1"]);
    assert_eq!(cli.verbosity, 1);
    assert_eq!(cli.release_version.as_deref(), Some("-rc1"));
}

#[cfg(unix)]
#[test]
fn non_utf8_version_is_rejected() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let result = Cli::try_parse_from([
        OsString::from("lk-release"),
        OsString::from_vec(vec![b'1', 0xff]),
    ]);
    let err = result.expect_err("expected non-UTF-8 version to be rejected");
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidUtf8);
}
