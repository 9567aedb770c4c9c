use std::{
    fmt,
    io::{self, Write as _},
    sync::OnceLock,
};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

const LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

/// Installs the stderr logger, the first call decides the level.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| StderrLogger { level });
    log::set_logger(logger)?;
    log::set_max_level(logger.level);
    Ok(())
}

/// `base` raised by one level per `verbosity`, capped at trace.
pub fn raise_level(base: LevelFilter, verbosity: u8) -> LevelFilter {
    let current = LEVELS.iter().position(|&l| l == base).unwrap_or(0);
    LEVELS[(current + verbosity as usize).min(LEVELS.len() - 1)]
}

pub struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record.level(), record.target(), record.args());
        // nowhere to report a failing stderr
        let _ = writeln!(io::stderr().lock(), "{}", line);
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

fn format_line(level: log::Level, target: &str, args: &fmt::Arguments) -> String {
    format!("[{:<5} {}] {}", level, target, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(raise_level(LevelFilter::Warn, 0), LevelFilter::Warn);
        assert_eq!(raise_level(LevelFilter::Warn, 1), LevelFilter::Info);
        assert_eq!(raise_level(LevelFilter::Warn, 2), LevelFilter::Debug);
        assert_eq!(raise_level(LevelFilter::Warn, 9), LevelFilter::Trace);
        assert_eq!(raise_level(LevelFilter::Off, 1), LevelFilter::Error);
    }

    #[test]
    fn line_format() {
        assert_eq!(
            format_line(
                log::Level::Info,
                "clabyrinth",
                &format_args!("{} walls", 24)
            ),
            "[INFO  clabyrinth] 24 walls"
        );
    }

    #[test]
    fn filters_by_level() {
        let logger = StderrLogger {
            level: LevelFilter::Info,
        };
        let metadata = |level| Metadata::builder().level(level).build();

        assert!(logger.enabled(&metadata(log::Level::Warn)));
        assert!(logger.enabled(&metadata(log::Level::Info)));
        assert!(!logger.enabled(&metadata(log::Level::Debug)));
    }
}
