use std::{
    borrow::Cow,
    fmt,
    fs::OpenOptions,
    io::Write,
    path::Path,
    sync::Arc,
};

use crate::{
    config::{Config, expand_path},
    log::{
        console_sink::ConsoleSink,
        file_sink::FileSink,
        log_error::LogError,
        log_event::LogEvent,
        log_level::LogLevel,
        log_lock::{LockGuard, LogLock},
        log_sink::LogSink,
        logger_config::{CONFIG_SECTION, LoggerConfig, parse_bool},
    },
};

/// A registered sink together with its threshold.
struct SinkSlot {
    sink: Arc<dyn LogSink>,
    min_level: LogLevel,
}

/// Synchronous leveled logger with a standard sink and a fixed-capacity sink registry.
///
/// # Architecture
///
/// 1. **Standard sink**: a [`ConsoleSink`] on stderr (or stdout), with its own
///    threshold and mute flag.
/// 2. **Registry**: up to `max_sinks` extra sinks, visited in registration order.
/// 3. **Lock hook**: optional [`LogLock`] held for the whole dispatch of one call.
///
/// Configuration methods take `&mut self`, so a logger is set up first and
/// then shared (e.g. behind an `Arc`) for logging from any thread.
pub struct Logger {
    config: LoggerConfig,
    lock: Option<Arc<dyn LogLock>>,
    std_level: LogLevel,
    std_quiet: bool,
    standard: ConsoleSink<Box<dyn Write + Send>>,
    sinks: Vec<SinkSlot>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("std_level", &self.std_level)
            .field("std_quiet", &self.std_quiet)
            .field("has_lock", &self.lock.is_some())
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl Logger {
    /// Creates a logger whose standard sink writes to `config.stream`.
    #[must_use]
    pub fn new(config: LoggerConfig) -> Self {
        Self::build(config, config.stream.writer())
    }

    /// Creates a logger whose standard sink writes to `out` instead of a process stream.
    pub fn with_writer(config: LoggerConfig, out: impl Write + Send + 'static) -> Self {
        Self::build(config, Box::new(out))
    }

    fn build(config: LoggerConfig, out: Box<dyn Write + Send>) -> Self {
        Self {
            config,
            lock: None,
            std_level: LogLevel::Trace,
            std_quiet: false,
            standard: ConsoleSink::new(out, &config),
            sinks: Vec::new(),
        }
    }

    /// Builds a logger from the `[Logging]` section of `config`.
    ///
    /// Besides the [`LoggerConfig`] keys this reads `level`, `quiet`, and
    /// `file` / `file_level`: when `file` is set the path is opened in append
    /// mode and registered as a file sink.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidConfig`] or [`LogError::UnknownLevel`] for
    /// malformed values and [`LogError::Io`] if the log file cannot be opened.
    pub fn from_config(config: &Config) -> Result<Self, LogError> {
        let get = |key: &str| config.get_non_empty_or_global(CONFIG_SECTION, key);

        let mut logger = Self::new(LoggerConfig::from_config(config)?);
        if let Some(v) = get("level") {
            logger.set_level(v.parse()?);
        }
        if let Some(v) = get("quiet") {
            logger.set_quiet(parse_bool("quiet", v)?);
        }
        if let Some(path) = get("file") {
            let level = get("file_level")
                .map(str::parse::<LogLevel>)
                .transpose()?
                .unwrap_or(LogLevel::Trace);
            logger.add_file_path(expand_path(path), level)?;
        }
        Ok(logger)
    }

    /// Installs the lock hook, or removes it with `None`.
    pub fn set_lock(&mut self, lock: Option<Arc<dyn LogLock>>) {
        self.lock = lock;
    }

    /// Sets the minimum level the standard sink emits.
    pub fn set_level(&mut self, level: LogLevel) {
        self.std_level = level;
    }

    /// Mutes or unmutes the standard sink. Registered sinks are unaffected.
    pub fn set_quiet(&mut self, quiet: bool) {
        self.std_quiet = quiet;
    }

    /// Registers `sink` in the first free slot.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::RegistryFull`] when all `max_sinks` slots are taken;
    /// the registry is left untouched.
    pub fn add_sink(&mut self, sink: Arc<dyn LogSink>, min_level: LogLevel) -> Result<(), LogError> {
        if self.sinks.len() >= self.config.max_sinks {
            return Err(LogError::RegistryFull {
                capacity: self.config.max_sinks,
            });
        }
        self.sinks.push(SinkSlot { sink, min_level });
        Ok(())
    }

    /// Registers `out` behind the plain-text [`FileSink`] renderer.
    ///
    /// # Errors
    ///
    /// Same as [`add_sink`](Self::add_sink).
    pub fn add_file_sink(
        &mut self,
        out: impl Write + Send + 'static,
        min_level: LogLevel,
    ) -> Result<(), LogError> {
        let sink = FileSink::new(out, self.config.timestamp);
        self.add_sink(Arc::new(sink), min_level)
    }

    /// Opens `path` for appending (creating it if missing) and registers it as a file sink.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::RegistryFull`] before touching the filesystem if no
    /// slot is free, or [`LogError::Io`] if the file cannot be opened.
    pub fn add_file_path(
        &mut self,
        path: impl AsRef<Path>,
        min_level: LogLevel,
    ) -> Result<(), LogError> {
        if self.sinks.len() >= self.config.max_sinks {
            return Err(LogError::RegistryFull {
                capacity: self.config.max_sinks,
            });
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        self.add_file_sink(file, min_level)
    }

    #[must_use]
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Minimum level of the standard sink.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.std_level
    }

    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.std_quiet
    }

    /// Number of registered sinks.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Returns `true` if a call at `level` would reach at least one sink.
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.std_enabled(level) || self.sinks.iter().any(|s| level >= s.min_level)
    }

    fn std_enabled(&self, level: LogLevel) -> bool {
        !self.std_quiet && level >= self.std_level
    }

    /// Dispatches one log call to every sink whose threshold `level` meets.
    ///
    /// The lock hook is held for the whole call. The standard sink goes first,
    /// then registered sinks in registration order. The message is formatted
    /// once; each sink gets its own capture time. Nothing is reported back:
    /// a sink that fails to write just loses the line.
    ///
    /// Usually called through [`logger_log!`](crate::logger_log) and friends.
    pub fn log(&self, level: LogLevel, file: &str, line: u32, args: fmt::Arguments<'_>) {
        let _guard = LockGuard::acquire(self.lock.as_deref());

        if !self.enabled(level) {
            return;
        }

        let message: Cow<'_, str> = match args.as_str() {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(args.to_string()),
        };
        let event = LogEvent::new(level, file, line, &message);

        if self.std_enabled(level) {
            self.standard.log(&event.restamped());
        }

        for slot in &self.sinks {
            if level >= slot.min_level {
                slot.sink.log(&event.restamped());
            }
        }
    }
}
