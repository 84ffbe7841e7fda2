//! Unified error type for utility-logger operations.

use crate::level::Verbosity;
use std::path::PathBuf;

/// Error type for utility-logger operations.
///
/// `Logger::log` never returns one of these; sink failures there are reported on the
/// diagnostic channel instead.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// A config or log file could not be opened.
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The level has no host event-log severity (only `All`).
    UnmappedSeverity(Verbosity),
    /// The host event-log facility refused an operation.
    EventLog(String),
    /// A value that the config file format cannot carry.
    Unrepresentable(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Open { path, source } => write!(f, "cannot open {}: {source}", path.display()),
            Self::UnmappedSeverity(level) => {
                write!(f, "verbosity '{level}' has no event-log severity")
            }
            Self::EventLog(msg) => write!(f, "event log error: {msg}"),
            Self::Unrepresentable(value) => {
                write!(f, "value cannot be written to a config file: '{value}'")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::Open { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
