#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

/// `LEVEL module - message`, with the crate prefix dropped from the target.
fn format_record(record: &Record) -> String {
    format!(
        "{:<5} {} - {}",
        record.level(),
        record.target().trim_start_matches("aviones::"),
        record.args()
    )
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "AVIONES_LOG";

/// Initialize logging with a level taken from `AVIONES_LOG`, falling back to
/// `default` if the variable is unset or invalid. Records go to stderr as
/// `LEVEL module - message` (e.g. `DEBUG shot - shot at (2, 3) -> Hit`) so
/// they never interleave with the boards on stdout.
pub fn init_logging(default: LevelFilter) {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(default);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
