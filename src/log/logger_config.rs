use std::{
    io::{self, Write},
    str::FromStr,
};

use crate::{config::Config, log::log_error::LogError};

/// Config file section read by [`LoggerConfig::from_config`].
pub const CONFIG_SECTION: &str = "Logging";

/// Default number of registry slots.
pub const DEFAULT_MAX_SINKS: usize = 10;

/// How (and whether) a rendered line starts with its capture time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TimestampMode {
    /// No timestamp.
    None,
    /// Seconds since the UNIX epoch.
    Epoch,
    /// Local time: `HH:MM:SS` on the console, `YYYY-MM-DD HH:MM:SS` in files.
    #[default]
    Local,
}

impl FromStr for TimestampMode {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(TimestampMode::None),
            "epoch" | "unix" => Ok(TimestampMode::Epoch),
            "local" => Ok(TimestampMode::Local),
            _ => Err(invalid("timestamp", s)),
        }
    }
}

/// Process stream used by the standard sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StdStream {
    #[default]
    Stderr,
    Stdout,
}

impl StdStream {
    /// Opens a writer on this stream.
    #[must_use]
    pub fn writer(self) -> Box<dyn Write + Send> {
        match self {
            StdStream::Stderr => Box::new(io::stderr()),
            StdStream::Stdout => Box::new(io::stdout()),
        }
    }
}

impl FromStr for StdStream {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stderr" => Ok(StdStream::Stderr),
            "stdout" => Ok(StdStream::Stdout),
            _ => Err(invalid("stream", s)),
        }
    }
}

/// Construction-time settings of a [`Logger`](crate::Logger).
///
/// These are read once when the logger is built and never change afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Capacity of the sink registry.
    pub max_sinks: usize,
    /// Destination of the standard sink.
    pub stream: StdStream,
    /// Timestamp format used by the built-in renderers.
    pub timestamp: TimestampMode,
    /// Color the level name on the standard sink.
    pub color: bool,
    /// Print `file:line:` on the standard sink.
    pub show_location: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_sinks: DEFAULT_MAX_SINKS,
            stream: StdStream::Stderr,
            timestamp: TimestampMode::Local,
            color: false,
            show_location: true,
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn with_max_sinks(mut self, max_sinks: usize) -> Self {
        self.max_sinks = max_sinks;
        self
    }

    #[must_use]
    pub fn with_stream(mut self, stream: StdStream) -> Self {
        self.stream = stream;
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: TimestampMode) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_location(mut self, show_location: bool) -> Self {
        self.show_location = show_location;
        self
    }

    /// Reads the `[Logging]` section of `config`, falling back to global keys
    /// and then to defaults.
    ///
    /// Recognized keys: `max_sinks`, `stream`, `timestamp`, `color`, `show_location`.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidConfig`] if a present key cannot be parsed.
    pub fn from_config(config: &Config) -> Result<Self, LogError> {
        let mut out = Self::default();
        let get = |key: &str| config.get_non_empty_or_global(CONFIG_SECTION, key);

        if let Some(v) = get("max_sinks") {
            out.max_sinks = v.trim().parse().map_err(|_| invalid("max_sinks", v))?;
        }
        if let Some(v) = get("stream") {
            out.stream = v.parse()?;
        }
        if let Some(v) = get("timestamp") {
            out.timestamp = v.parse()?;
        }
        if let Some(v) = get("color") {
            out.color = parse_bool("color", v)?;
        }
        if let Some(v) = get("show_location") {
            out.show_location = parse_bool("show_location", v)?;
        }
        Ok(out)
    }
}

pub(crate) fn parse_bool(key: &str, value: &str) -> Result<bool, LogError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

fn invalid(key: &str, value: &str) -> LogError {
    LogError::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
    }
}
