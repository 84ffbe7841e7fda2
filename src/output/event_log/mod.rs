//! Host event-log capability: register a source, write entries with a severity, close.
//!
//! Windows uses the Win32 event log, Unix uses syslog(3), and anything else gets a no-op.
//! `platform_default` picks the right one at build time.

mod memory;
#[cfg(unix)]
mod syslog;
#[cfg(windows)]
mod win32;

pub use memory::{MemoryEventLog, RecordedEntry};
#[cfg(unix)]
pub use syslog::SyslogEventLog;
#[cfg(windows)]
pub use win32::WindowsEventLog;

use crate::config::LogTarget;
use crate::level::Verbosity;
use serde::Serialize;
use std::fmt;

/// Entry types the host event log understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventSeverity {
    Information,
    Warning,
    Error,
    SuccessAudit,
    FailureAudit,
}

impl EventSeverity {
    /// Host-facing severity name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Information => "Information",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::SuccessAudit => "SuccessAudit",
            Self::FailureAudit => "FailureAudit",
        }
    }
}

impl fmt::Display for EventSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `None` and `All` have no host severity.
impl TryFrom<Verbosity> for EventSeverity {
    type Error = crate::Error;

    fn try_from(level: Verbosity) -> Result<Self, crate::Error> {
        match level {
            Verbosity::Information => Ok(Self::Information),
            Verbosity::Warning => Ok(Self::Warning),
            Verbosity::Error => Ok(Self::Error),
            Verbosity::SuccessAudit => Ok(Self::SuccessAudit),
            Verbosity::FailureAudit => Ok(Self::FailureAudit),
            Verbosity::None | Verbosity::All => Err(crate::Error::UnmappedSeverity(level)),
        }
    }
}

/// A host event-log facility. One instance backs one `Logger` and holds at most one open
/// source at a time.
pub trait EventLog: Send {
    /// Registers `source` against the `target` log if the host does not know it yet, then
    /// opens it for writing. Replaces any source that was already open.
    ///
    /// # Errors
    /// `Error::EventLog` if the host refuses registration or opening.
    fn create_source(&mut self, source: &str, target: &LogTarget) -> Result<(), crate::Error>;

    /// Writes one entry through the open source.
    ///
    /// # Errors
    /// `Error::EventLog` if no source is open or the host rejects the entry.
    fn write_entry(&mut self, severity: EventSeverity, text: &str) -> Result<(), crate::Error>;

    /// Releases the open source, if any.
    fn close(&mut self);
}

/// Accepts everything and writes nothing. Used where the host has no event log.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEventLog;

impl EventLog for NoopEventLog {
    fn create_source(&mut self, _source: &str, _target: &LogTarget) -> Result<(), crate::Error> {
        Ok(())
    }

    fn write_entry(&mut self, _severity: EventSeverity, _text: &str) -> Result<(), crate::Error> {
        Ok(())
    }

    fn close(&mut self) {}
}

/// The native event log for the build target.
#[must_use]
pub fn platform_default() -> Box<dyn EventLog> {
    #[cfg(windows)]
    {
        Box::new(WindowsEventLog::new())
    }
    #[cfg(unix)]
    {
        Box::new(SyslogEventLog::new())
    }
    #[cfg(not(any(unix, windows)))]
    {
        Box::new(NoopEventLog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_levels_map_to_audit_severities() {
        assert_eq!(
            EventSeverity::try_from(Verbosity::SuccessAudit).unwrap(),
            EventSeverity::SuccessAudit
        );
        assert_eq!(
            EventSeverity::try_from(Verbosity::FailureAudit).unwrap(),
            EventSeverity::FailureAudit
        );
    }

    #[test]
    fn all_has_no_severity() {
        assert!(matches!(
            EventSeverity::try_from(Verbosity::All),
            Err(crate::Error::UnmappedSeverity(Verbosity::All))
        ));
    }
}
