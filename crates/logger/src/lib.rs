//! Logging infrastructure for warpwrap.
//!
//! A small process-wide logger that appends timestamped lines to a file.
//! Until [`init`] is called every logging function is a no-op, so library
//! code and tests can log without setting anything up.

use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Convert log level to string
    pub fn to_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

#[derive(Debug)]
struct Logger {
    min_level: LogLevel,
    file_path: PathBuf,
}

impl Logger {
    fn new(file_path: PathBuf, min_level: LogLevel) -> Self {
        if let Some(parent) = file_path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        // Each run starts a fresh log file
        if let Ok(mut file) = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)
        {
            let _ = writeln!(file, "=== warpwrap log start ===");
        }

        Self {
            min_level,
            file_path,
        }
    }

    fn add_entry(&self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = Local::now().format("%H:%M:%S");

        // Write to file (create if deleted)
        if let Ok(mut file) = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.file_path)
        {
            let _ = writeln!(file, "[{}] {}: {}", timestamp, level.to_str(), message);
        }
    }
}

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

fn log(level: LogLevel, message: String) {
    if let Some(logger) = LOGGER.get() {
        if let Ok(logger) = logger.lock() {
            logger.add_entry(level, &message);
        }
    }
}

/// Initialize the global logger
///
/// Subsequent calls are ignored.
///
/// # Arguments
///
/// * `file_path` - Path to the log file
/// * `min_level` - Minimum log level to record (Debug, Info, Warn, Error)
pub fn init(file_path: PathBuf, min_level: LogLevel) {
    LOGGER.get_or_init(|| Mutex::new(Logger::new(file_path, min_level)));
}

/// Log a debug message
pub fn debug(message: impl Into<String>) {
    log(LogLevel::Debug, message.into());
}

/// Log an informational message
pub fn info(message: impl Into<String>) {
    log(LogLevel::Info, message.into());
}

/// Log a warning message
pub fn warn(message: impl Into<String>) {
    log(LogLevel::Warn, message.into());
}

/// Log an error message
pub fn error(message: impl Into<String>) {
    log(LogLevel::Error, message.into());
}

/// Default log file name inside `dir`
pub fn default_file_in(dir: &Path) -> PathBuf {
    dir.join("warpwrap.log")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_level_from_str() {
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("warning").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("loud").is_err());
    }

    #[test]
    fn test_logger_filters_by_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = default_file_in(dir.path());
        let logger = Logger::new(path.clone(), LogLevel::Info);

        logger.add_entry(LogLevel::Debug, "hidden");
        logger.add_entry(LogLevel::Info, "first");
        logger.add_entry(LogLevel::Error, "second");

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("=== warpwrap log start ==="));
        assert!(contents.contains("INFO: first"));
        assert!(contents.contains("ERROR: second"));
        assert!(!contents.contains("hidden"));
    }

    #[test]
    fn test_new_logger_truncates_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = default_file_in(dir.path());
        Logger::new(path.clone(), LogLevel::Debug).add_entry(LogLevel::Info, "old run");

        Logger::new(path.clone(), LogLevel::Debug);

        assert!(!fs::read_to_string(&path).unwrap().contains("old run"));
    }

    #[test]
    fn test_logging_before_init_is_noop() {
        // Must not panic when nothing called init()
        info("nobody listens");
        error("still nobody");
    }
}
