//! In-process event log. Clones share one recording, so a caller can hand one clone to a
//! `Logger` and inspect what it wrote through another.

use super::{EventLog, EventSeverity};
use crate::config::LogTarget;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One entry as the host would have stored it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEntry {
    pub source: String,
    pub target: LogTarget,
    pub severity: EventSeverity,
    pub text: String,
}

#[derive(Debug, Default)]
struct State {
    registered: Vec<(String, LogTarget)>,
    open: Option<(String, LogTarget)>,
    entries: Vec<RecordedEntry>,
    create_calls: usize,
    close_calls: usize,
    failing: bool,
}

/// Event log that records entries in memory instead of reaching the host.
#[derive(Debug, Default, Clone)]
pub struct MemoryEventLog {
    state: Arc<Mutex<State>>,
}

impl MemoryEventLog {
    /// An empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// While set, every operation fails the way an unavailable host facility would.
    pub fn set_failing(&self, failing: bool) {
        self.state().failing = failing;
    }

    /// Entries written so far, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<RecordedEntry> {
        self.state().entries.clone()
    }

    /// Sources registered so far, each once, in registration order.
    #[must_use]
    pub fn registered(&self) -> Vec<(String, LogTarget)> {
        self.state().registered.clone()
    }

    /// Whether a source is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state().open.is_some()
    }

    /// Number of `create_source` calls, failed ones included.
    #[must_use]
    pub fn create_calls(&self) -> usize {
        self.state().create_calls
    }

    /// Number of `close` calls.
    #[must_use]
    pub fn close_calls(&self) -> usize {
        self.state().close_calls
    }
}

impl EventLog for MemoryEventLog {
    fn create_source(&mut self, source: &str, target: &LogTarget) -> Result<(), crate::Error> {
        let mut state = self.state();
        state.create_calls += 1;
        if state.failing {
            return Err(crate::Error::EventLog(format!(
                "cannot register source {source} on {target}"
            )));
        }
        let binding = (source.to_string(), target.clone());
        if !state.registered.contains(&binding) {
            state.registered.push(binding.clone());
        }
        state.open = Some(binding);
        Ok(())
    }

    fn write_entry(&mut self, severity: EventSeverity, text: &str) -> Result<(), crate::Error> {
        let mut state = self.state();
        if state.failing {
            return Err(crate::Error::EventLog("event log unavailable".to_string()));
        }
        let Some((source, target)) = state.open.clone() else {
            return Err(crate::Error::EventLog("no event source open".to_string()));
        };
        state.entries.push(RecordedEntry {
            source,
            target,
            severity,
            text: text.to_string(),
        });
        Ok(())
    }

    fn close(&mut self) {
        let mut state = self.state();
        state.close_calls += 1;
        state.open = None;
    }
}
