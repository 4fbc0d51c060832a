use std::sync::OnceLock;

use chrono::Local;
use log::{Level, Log, Metadata, Record, SetLoggerError};

/// Diagnostics go to stderr so they never interleave with the listing on stdout.
pub struct Logger {
    level: Level,
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{} {} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Install the stderr logger at `Warn`. Later calls are no-ops.
pub fn init() -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    let first_call = LOGGER.get().is_none();
    let logger = LOGGER.get_or_init(|| Logger { level: Level::Warn });

    if first_call {
        log::set_logger(logger)?;
        log::set_max_level(logger.level.to_level_filter());
    }

    Ok(())
}
