//! Logging infrastructure for the truecase library.
//!
//! The library reports through the `log` facade. This module provides the
//! stderr backend that turns those records into output, filtered by a
//! configurable [`LogLevel`].

use std::env;
use std::fmt;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable consulted when no CLI flag picks a level.
pub const LOG_MODE_ENV: &str = "TRUECASE_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use truecase::LogLevel;
///
/// let quiet = LogLevel::Quiet;
/// let normal = LogLevel::Normal;
/// let verbose = LogLevel::Verbose;
///
/// assert!(quiet < normal);
/// assert!(normal < verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all output.
    Quiet,
    /// Normal output level (errors and warnings).
    Normal,
    /// Verbose output (errors, warnings, info, and debug messages).
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use truecase::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The most detailed `log` level let through at this verbosity.
    ///
    /// # Examples
    ///
    /// ```
    /// use log::LevelFilter;
    /// use truecase::LogLevel;
    ///
    /// assert_eq!(LogLevel::Quiet.filter(), LevelFilter::Off);
    /// assert_eq!(LogLevel::Normal.filter(), LevelFilter::Warn);
    /// assert_eq!(LogLevel::Verbose.filter(), LevelFilter::Debug);
    /// ```
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

/// A simple stderr-based logger.
///
/// The logger respects the configured log level and only outputs messages
/// at or above that level. It can be used directly, or installed as the
/// `log` backend with [`init_logger`].
///
/// # Examples
///
/// ```
/// use truecase::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.error("This is an error message");
/// logger.info("This will not be printed (requires Verbose)");
/// ```
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Logs an error message.
    ///
    /// Error messages are always displayed unless the level is Quiet.
    pub fn error(&self, message: &str) {
        self.emit(log::Level::Error, message);
    }

    /// Logs a warning message.
    ///
    /// Warning messages are displayed at Normal and Verbose levels.
    pub fn warn(&self, message: &str) {
        self.emit(log::Level::Warn, message);
    }

    /// Logs an informational message.
    ///
    /// Info messages are only displayed at Verbose level.
    ///
    /// # Examples
    ///
    /// ```
    /// use truecase::{Logger, LogLevel};
    ///
    /// let logger = Logger::new(LogLevel::Verbose);
    /// logger.info("Listing /usr/local/Aria");
    /// ```
    pub fn info(&self, message: &str) {
        self.emit(log::Level::Info, message);
    }

    /// Logs a debug message.
    ///
    /// Debug messages are only displayed at Verbose level.
    pub fn debug(&self, message: &str) {
        self.emit(log::Level::Debug, message);
    }

    fn emit(&self, level: log::Level, message: &str) {
        if level <= self.level.filter() {
            eprintln!("{}: {message}", label(level));
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", label(record.level()), record.args());
        }
    }

    fn flush(&self) {}
}

fn label(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARN",
        log::Level::Info => "INFO",
        log::Level::Debug | log::Level::Trace => "DEBUG",
    }
}

/// Picks the log level from CLI flags and the environment.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. `TRUECASE_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
#[must_use]
pub fn select_level(verbose: bool, quiet: bool) -> LogLevel {
    // CLI flags take precedence
    if verbose {
        return LogLevel::Verbose;
    }
    if quiet {
        return LogLevel::Quiet;
    }

    if let Ok(env_value) = env::var(LOG_MODE_ENV) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return level;
        }
    }

    LogLevel::Normal
}

/// Installs a [`Logger`] as the global `log` backend.
///
/// The level is chosen by [`select_level`]. Only the first call installs a
/// backend; later calls adjust the global maximum level and leave the
/// installed logger in place. Returns the level that was selected.
///
/// # Examples
///
/// ```
/// use truecase::{init_logger, LogLevel};
///
/// let level = init_logger(false, true);
/// assert_eq!(level, LogLevel::Quiet);
/// ```
pub fn init_logger(verbose: bool, quiet: bool) -> LogLevel {
    let level = select_level(verbose, quiet);
    if log::set_boxed_logger(Box::new(Logger::new(level))).is_err() {
        log::debug!("Logger already installed; keeping it");
    }
    log::set_max_level(level.filter());
    level
}
