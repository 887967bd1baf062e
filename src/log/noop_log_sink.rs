use crate::log::{log_event::LogEvent, log_sink::LogSink};

#[derive(Debug, Clone, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    #[inline]
    fn log(&self, _event: &LogEvent<'_>) {}
}
