//! Logging setup for the CLI.

use log::LevelFilter;

/// Maps `-v`/`-q` flags to a level for wavjoin's own modules.
///
/// `-v` = info, `-vv` = debug, `-vvv` = trace; `-q` keeps errors only.
pub fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initializes `env_logger` on stderr.
///
/// Dependencies stay at warn; `RUST_LOG` still overrides everything.
pub fn init_logging(verbose: u8, quiet: bool) {
    let level = log_level(verbose, quiet);
    let mut builder = env_logger::Builder::new();

    builder.filter_level(LevelFilter::Warn);
    builder.filter_module("wavjoin_core", level);
    builder.filter_module("wavjoin_cli", level);
    builder.filter_module("wavjoin", level);
    builder.parse_default_env();

    // Tests and embedders may already have installed a logger.
    let _ = builder.format_timestamp_millis().try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(log_level(0, false), LevelFilter::Warn);
        assert_eq!(log_level(1, false), LevelFilter::Info);
        assert_eq!(log_level(2, false), LevelFilter::Debug);
        assert_eq!(log_level(5, false), LevelFilter::Trace);
    }

    #[test]
    fn test_quiet_wins() {
        assert_eq!(log_level(3, true), LevelFilter::Error);
    }
}
