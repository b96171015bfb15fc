//! Logger initialisation.
//!
//! Diagnostics use the `log` facade with an `env_logger` backend writing to
//! stderr. The `-v` count picks the default level; `RUST_LOG` overrides it.

use log::LevelFilter;

/// Map the `-v` count onto a log level.
///
/// # Examples
///
/// ```
/// use lk_release::logging::level_for_verbosity;
/// use log::LevelFilter;
///
/// assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
/// assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
/// ```
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialise the global logger.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for_verbosity(verbosity))
        .format_timestamp(None)
        .parse_default_env();

    if builder.try_init().is_err() {
        // A logger is already installed.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, LevelFilter::Warn)]
    #[case(1, LevelFilter::Info)]
    #[case(2, LevelFilter::Debug)]
    #[case(3, LevelFilter::Trace)]
    #[case(9, LevelFilter::Trace)]
    fn verbosity_maps_to_level(#[case] verbosity: u8, #[case] expected: LevelFilter) {
        assert_eq!(level_for_verbosity(verbosity), expected);
    }

    #[test]
    fn repeated_init_is_harmless() {
        init(0);
        init(3);
    }
}
