//! Console logging through the `log` facade with an `env_logger` backend

use crate::io::configuration::{LOG_FILTER_ENV, SUMMARY_LOG_TARGET};
use log::{Level, LevelFilter};
use std::io::Write;

/// Pick the log level from the CLI verbosity flags
///
/// `quiet` wins over `verbose` when both are given.
pub const fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Level applied to the run summary target
///
/// The failure count stays visible when `--quiet` lowers everything else.
pub fn summary_level(level: LevelFilter) -> LevelFilter {
    level.max(LevelFilter::Info)
}

/// Prefix printed in front of every console line
pub const fn level_label(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

/// Install the global logger
///
/// Lines are written to stderr as `[LEVEL] message`. A `RUST_LOG` value, when
/// present, takes precedence over `level`. The run summary is logged at
/// [`summary_level`] regardless of `level`.
///
/// Returns `false` if a global logger was already installed.
pub fn init_logging(level: LevelFilter) -> bool {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.filter_module(SUMMARY_LOG_TARGET, summary_level(level));

    if let Ok(filters) = std::env::var(LOG_FILTER_ENV) {
        builder.parse_filters(&filters);
    }

    builder.format(|buf, record| {
        writeln!(buf, "[{}] {}", level_label(record.level()), record.args())
    });

    builder.try_init().is_ok()
}
