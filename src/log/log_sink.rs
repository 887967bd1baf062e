use crate::log::log_event::LogEvent;

/// A destination a [`Logger`](crate::Logger) can dispatch events to.
///
/// Implementations render the event and write it out. Failures stay inside
/// the sink: a sink that cannot write simply produces no output.
pub trait LogSink: Send + Sync {
    fn log(&self, event: &LogEvent<'_>);
}

/// Plain functions and closures work as sinks.
impl<F> LogSink for F
where
    F: Fn(&LogEvent<'_>) + Send + Sync,
{
    #[inline]
    fn log(&self, event: &LogEvent<'_>) {
        self(event);
    }
}
