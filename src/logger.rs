//! Leveled line logger
//!
//! Writes `[LEVEL] message` lines to standard output. Internal diagnostics go
//! through `tracing` instead and end up on stderr.
use std::fmt;

/// Severity of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        };
        f.write_str(tag)
    }
}

/// Format a single log line without a trailing newline
pub fn format_line(level: Level, message: &str) -> String {
    format!("[{}] {}", level, message)
}

/// Stateless stdout logger
pub struct Logger;

impl Logger {
    pub fn log(level: Level, message: &str) {
        println!("{}", format_line(level, message));
    }

    pub fn info(message: &str) {
        Self::log(Level::Info, message);
    }

    pub fn warning(message: &str) {
        Self::log(Level::Warning, message);
    }

    pub fn error(message: &str) {
        Self::log(Level::Error, message);
    }
}
