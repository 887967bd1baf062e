#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};

use rustylog::{LogEvent, LogSink};

/// `Write` handle whose bytes stay readable after a logger takes ownership of a clone.
#[derive(Clone, Default)]
pub struct SharedBuf(pub Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuf {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_string).collect()
    }
}

/// Sink that appends its tag to a shared journal on every event.
pub struct Tagged {
    pub tag: usize,
    pub journal: Arc<Mutex<Vec<usize>>>,
}

impl LogSink for Tagged {
    fn log(&self, _event: &LogEvent<'_>) {
        self.journal.lock().unwrap().push(self.tag);
    }
}
