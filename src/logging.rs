#![cfg(feature = "std")]

//! Logger for the binaries.
//!
//! Stdout carries the board and the sim's JSON summary, so every record goes
//! to stderr, tagged with the engine module that emitted it.

use log::{LevelFilter, Log, Metadata, Record};
use std::env;

/// Environment variable holding the engine's log level.
pub const LOG_ENV: &str = "BROADSIDE_LOG";

/// Ceiling for records from other crates, whatever `BROADSIDE_LOG` says.
const FOREIGN_LEVEL: LevelFilter = LevelFilter::Warn;

struct MatchLogger;

impl Log for MatchLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let ceiling = if metadata.target().starts_with(env!("CARGO_CRATE_NAME")) {
            log::max_level()
        } else {
            FOREIGN_LEVEL.min(log::max_level())
        };
        metadata.level() <= ceiling
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let module = record
            .module_path()
            .and_then(|path| path.rsplit("::").next())
            .unwrap_or("-");
        eprintln!("[{:<5} {}] {}", record.level(), module, record.args());
    }

    fn flush(&self) {}
}

static LOGGER: MatchLogger = MatchLogger;

/// Level named by a `BROADSIDE_LOG` value. Unset or unrecognised values give
/// `warn`, which keeps log lines off the interactive board.
pub fn log_level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger at the level taken from `BROADSIDE_LOG`.
/// Calling it again is a no-op.
pub fn init_logging() {
    let level = log_level_from(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
