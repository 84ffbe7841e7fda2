//! The two sinks a `Logger` can route to: a text file and the host event log.
//!
//! The event log sits behind the `EventLog` trait so platforms without one, and tests,
//! can substitute their own backend.

pub mod event_log;
mod file;

pub use event_log::{EventLog, EventSeverity, MemoryEventLog, NoopEventLog, RecordedEntry};
pub use file::FileOutput;

use crate::level::Verbosity;

/// The log line shape shared by the file sink: `<level-name>\t<message>`, no newline.
#[must_use]
pub fn format_line(level: Verbosity, message: &str) -> String {
    format!("{}\t{message}", level.as_str())
}
