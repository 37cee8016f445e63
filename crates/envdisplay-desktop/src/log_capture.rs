//! Console logger for the simulator.
//!
//! Every line is stamped with the wall clock as the display would show it,
//! so log output and rendered frames can be lined up by eye.

use log::{Level, LevelFilter, Log, Metadata, Record};

use envdisplay_core::time::format_clock;
use envdisplay_core::time_sync::TimeSource as _;

use crate::clock::SystemClock;

pub struct ConsoleLogger {
    max_level: Level,
}

impl ConsoleLogger {
    pub const fn new(max_level: Level) -> Self {
        Self { max_level }
    }
}

fn level_str(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let stamp = format_clock(SystemClock.epoch_seconds());
        println!(
            "{} [{}] {}: {}",
            stamp,
            level_str(record.level()),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger::new(Level::Trace);

/// Installs the console logger. Calling it again only changes the level.
pub fn init(max_level: LevelFilter) {
    // already installed on a second call, which is fine
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(max_level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_respects_max_level() {
        let logger = ConsoleLogger::new(Level::Info);
        let warn = Metadata::builder().level(Level::Warn).build();
        let debug = Metadata::builder().level(Level::Debug).build();

        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn test_init_twice() {
        init(LevelFilter::Warn);
        init(LevelFilter::Info);
        assert_eq!(log::max_level(), LevelFilter::Info);
    }
}
