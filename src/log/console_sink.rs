use std::{
    io::{self, Write},
    sync::{Mutex, PoisonError},
};

use crate::log::{
    log_event::LogEvent,
    log_sink::LogSink,
    logger_config::{LoggerConfig, TimestampMode},
};

const RESET: &str = "\x1b[0m";
const GRAY: &str = "\x1b[90m";

/// Human-oriented renderer used by the standard sink.
///
/// Line layout: `[time ]LEVEL [file:line: ]message`, where the time is
/// `HH:MM:SS` (or epoch seconds) and the level name is padded to 5 columns.
/// With color enabled the level is wrapped in its ANSI color and the location
/// is dimmed. Every line is flushed immediately.
pub struct ConsoleSink<W> {
    out: Mutex<W>,
    timestamp: TimestampMode,
    color: bool,
    show_location: bool,
}

impl<W: Write + Send> ConsoleSink<W> {
    /// Creates a console sink with the formatting options of `config`.
    pub fn new(out: W, config: &LoggerConfig) -> Self {
        Self {
            out: Mutex::new(out),
            timestamp: config.timestamp,
            color: config.color,
            show_location: config.show_location,
        }
    }

    fn write_line(&self, out: &mut W, event: &LogEvent<'_>) -> io::Result<()> {
        match self.timestamp {
            TimestampMode::None => {}
            TimestampMode::Epoch => write!(out, "{} ", event.time.timestamp())?,
            TimestampMode::Local => write!(out, "{} ", event.time.format("%H:%M:%S"))?,
        }

        if self.color {
            write!(out, "{}{:<5}{RESET} ", event.level.color(), event.level)?;
            if self.show_location {
                write!(out, "{GRAY}{}:{}:{RESET} ", event.file, event.line)?;
            }
        } else {
            write!(out, "{:<5} ", event.level)?;
            if self.show_location {
                write!(out, "{}:{}: ", event.file, event.line)?;
            }
        }

        writeln!(out, "{}", event.message)?;
        out.flush()
    }

    /// Consumes the sink, returning its writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> LogSink for ConsoleSink<W> {
    fn log(&self, event: &LogEvent<'_>) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = self.write_line(&mut *out, event);
    }
}
