use std::{
    io::{self, Write},
    sync::{Mutex, PoisonError},
};

use crate::log::{log_event::LogEvent, log_sink::LogSink, logger_config::TimestampMode};

/// Plain-text renderer for files and other non-terminal destinations.
///
/// Line layout: `[YYYY-MM-DD HH:MM:SS ]LEVEL file:line: message`. Never colored,
/// always includes the location and flushes after every line.
pub struct FileSink<W> {
    out: Mutex<W>,
    timestamp: TimestampMode,
}

impl<W: Write + Send> FileSink<W> {
    pub fn new(out: W, timestamp: TimestampMode) -> Self {
        Self {
            out: Mutex::new(out),
            timestamp,
        }
    }

    fn write_line(&self, out: &mut W, event: &LogEvent<'_>) -> io::Result<()> {
        match self.timestamp {
            TimestampMode::None => {}
            TimestampMode::Epoch => write!(out, "{} ", event.time.timestamp())?,
            TimestampMode::Local => write!(out, "{} ", event.time.format("%Y-%m-%d %H:%M:%S"))?,
        }
        writeln!(
            out,
            "{:<5} {}:{}: {}",
            event.level, event.file, event.line, event.message
        )?;
        out.flush()
    }

    /// Consumes the sink, returning its writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> LogSink for FileSink<W> {
    fn log(&self, event: &LogEvent<'_>) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = self.write_line(&mut *out, event);
    }
}
