//! Leveled logging macros for [`Logger`](crate::Logger).
//!
//! Every macro forwards the call site (`file!()`, `line!()`) and a
//! `format_args!` body to [`Logger::log`](crate::Logger::log).
//!
//! # Feature Flags
//! specific log levels are controlled by cargo features:
//! `log-trace`, `log-debug`, `log-info`, `log-warn`, `log-error`, `log-fatal`.
//!
//! If a feature is disabled, the corresponding macro expands to `()`, removing
//! all formatting overhead at compile time. Runtime thresholds still apply to
//! the enabled ones.

// ============================================================================
// 1. GENERIC MACRO (The "Worker")
// ============================================================================
// Always available; the level-specific macros below forward to it.

#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $($arg:tt)+) => {{
        $logger.log($lvl, file!(), line!(), format_args!($($arg)+))
    }};
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS (Feature Gated)
// ============================================================================

// ---------------------- FATAL ----------------------
#[cfg(feature = "log-fatal")]
#[macro_export]
macro_rules! logger_fatal { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Fatal, $($arg)+) } }

#[cfg(not(feature = "log-fatal"))]
#[macro_export]
macro_rules! logger_fatal {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- ERROR ----------------------
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! logger_error { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Error, $($arg)+) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! logger_error {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- WARN ----------------------
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! logger_warn { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Warn, $($arg)+) } }

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! logger_warn {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! logger_info { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Info, $($arg)+) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! logger_info {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! logger_debug { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Debug, $($arg)+) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! logger_debug {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- TRACE ----------------------
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! logger_trace { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Trace, $($arg)+) } }

#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! logger_trace {
    ($($arg:tt)*) => {
        ()
    };
}
