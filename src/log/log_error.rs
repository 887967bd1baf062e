use std::{fmt, io};

/// Errors surfaced by logger configuration.
///
/// Dispatch itself never fails: write and flush errors inside a sink are dropped.
#[derive(Debug)]
pub enum LogError {
    /// Every registry slot is taken; the registration was rejected.
    RegistryFull { capacity: usize },
    /// A level name that matches none of the known levels.
    UnknownLevel(String),
    /// A config key holds a value that cannot be interpreted.
    InvalidConfig { key: String, value: String },
    /// Opening a log destination failed.
    Io(io::Error),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use LogError::*;
        match self {
            RegistryFull { capacity } => write!(f, "sink registry full ({capacity} slots)"),
            UnknownLevel(name) => write!(f, "unknown log level: {name}"),
            InvalidConfig { key, value } => write!(f, "invalid value for {key}: {value}"),
            Io(e) => write!(f, "log destination I/O error: {e}"),
        }
    }
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LogError {
    fn from(e: io::Error) -> Self {
        LogError::Io(e)
    }
}
