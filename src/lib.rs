//! RustyLog is a small, embeddable leveled logger.
//!
//! A [`Logger`] formats each log call once and hands it to a standard
//! console sink plus a fixed-capacity list of registered sinks, each with
//! its own minimum level. An optional lock hook serializes the whole
//! dispatch across threads.
//!
//! ```no_run
//! use rustylog::{LogLevel, Logger, LoggerConfig, logger_info};
//!
//! let mut logger = Logger::new(LoggerConfig::default().with_color(true));
//! logger.set_level(LogLevel::Info);
//! logger.add_file_path("app.log", LogLevel::Warn)?;
//! logger_info!(logger, "listening on port {}", 8080);
//! # Ok::<(), rustylog::LogError>(())
//! ```

/// Handles configuration loading and management.
pub mod config;
/// Leveled logging: levels, sinks, renderers and the dispatching logger.
pub mod log;

pub use log::{
    BlockingLock, ConsoleSink, FileSink, LogError, LogEvent, LogLevel, LogLock, LogSink, Logger,
    LoggerConfig, NoopLogSink, StdStream, TimestampMode, level_name,
};
