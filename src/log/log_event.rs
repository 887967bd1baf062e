use chrono::{DateTime, Local};

use crate::log::log_level::LogLevel;

/// One log call as seen by a single sink.
///
/// The logger builds a fresh `LogEvent` for every sink it dispatches to, so
/// `time` is captured right before that sink renders. Everything else is
/// shared across the sinks of one call; `message` is already formatted.
#[derive(Debug, Clone, Copy)]
pub struct LogEvent<'a> {
    /// The severity level of the event.
    pub level: LogLevel,
    /// Source file of the call site, typically `file!()`.
    pub file: &'a str,
    /// Source line of the call site, typically `line!()`.
    pub line: u32,
    /// The formatted message body.
    pub message: &'a str,
    /// Capture time, stamped per sink.
    pub time: DateTime<Local>,
}

impl<'a> LogEvent<'a> {
    /// Creates an event stamped with the current local time.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rustylog::{LogEvent, LogLevel};
    ///
    /// let ev = LogEvent::new(LogLevel::Info, file!(), line!(), "connection established");
    /// assert_eq!(ev.message, "connection established");
    /// ```
    #[must_use]
    pub fn new(level: LogLevel, file: &'a str, line: u32, message: &'a str) -> Self {
        Self {
            level,
            file,
            line,
            message,
            time: Local::now(),
        }
    }

    /// Returns a copy of this event re-stamped with the current time.
    #[must_use]
    pub fn restamped(&self) -> Self {
        Self {
            time: Local::now(),
            ..*self
        }
    }
}
