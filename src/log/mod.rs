pub mod console_sink;
pub mod file_sink;
pub mod log_error;
pub mod log_event;
pub mod log_level;
pub mod log_lock;
pub mod log_macros;
pub mod log_sink;
pub mod logger;
pub mod logger_config;
pub mod noop_log_sink;

pub use console_sink::ConsoleSink;
pub use file_sink::FileSink;
pub use log_error::LogError;
pub use log_event::LogEvent;
pub use log_level::{LogLevel, level_name};
pub use log_lock::{BlockingLock, LogLock};
pub use log_sink::LogSink;
pub use logger::Logger;
pub use logger_config::{LoggerConfig, StdStream, TimestampMode};
pub use noop_log_sink::NoopLogSink;
