//! The configurable logger: validated settings, the threshold filter, and dispatch to the
//! file or event-log sink.

mod from_config;

use crate::config::{LogMode, LogTarget, Settings, is_valid_file_name};
use crate::internal;
use crate::level::Verbosity;
use crate::output::event_log::{self, EventLog, EventSeverity};
use crate::output::FileOutput;
use std::fmt;

/// The event source currently open on the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EventSource {
    source: String,
    target: LogTarget,
}

/// A single-threaded, synchronous logger. Each instance owns its settings and its event-log
/// backend; instances share nothing with each other.
///
/// Nothing here panics or returns an error from `log`: rejected messages vanish and sink
/// failures are reported on the diagnostic channel.
pub struct Logger {
    settings: Settings,
    event_log: Box<dyn EventLog>,
    /// `Some` once an event source has been opened, until the mode or target changes.
    system_log: Option<EventSource>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("settings", &self.settings)
            .field("system_log", &self.system_log)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Default settings, backed by the platform's native event log.
    #[must_use]
    pub fn new() -> Self {
        Self::from_event_log(event_log::platform_default())
    }

    /// Default settings, backed by a caller-supplied event log.
    #[must_use]
    pub fn with_event_log(event_log: impl EventLog + 'static) -> Self {
        Self::from_event_log(Box::new(event_log))
    }

    fn from_event_log(event_log: Box<dyn EventLog>) -> Self {
        internal::init();
        Self {
            settings: Settings::default(),
            event_log,
            system_log: None,
        }
    }

    /// Discards all state and restores the defaults, closing any open event source.
    pub fn initialize(&mut self) {
        self.close_system_log();
        self.settings = Settings::default();
        internal::debug("LOGGER", "Initialized with default settings");
    }

    /// Writes `message` if `level` passes the threshold; see `Verbosity::passes`.
    pub fn log(&mut self, message: &str, level: Verbosity) {
        if !level.passes(self.settings.verbosity_threshold) {
            return;
        }
        match self.settings.mode {
            LogMode::ToFile => self.write_file(level, message),
            LogMode::ToSystemLog => self.write_system_log(level, message),
        }
    }

    /// Logs `message` at `Verbosity::Information`.
    pub fn information(&mut self, message: &str) {
        self.log(message, Verbosity::Information);
    }

    /// Logs `message` at `Verbosity::Warning`.
    pub fn warning(&mut self, message: &str) {
        self.log(message, Verbosity::Warning);
    }

    /// Logs `message` at `Verbosity::Error`.
    pub fn error(&mut self, message: &str) {
        self.log(message, Verbosity::Error);
    }

    /// Logs `message` at `Verbosity::SuccessAudit`.
    pub fn success_audit(&mut self, message: &str) {
        self.log(message, Verbosity::SuccessAudit);
    }

    /// Logs `message` at `Verbosity::FailureAudit`.
    pub fn failure_audit(&mut self, message: &str) {
        self.log(message, Verbosity::FailureAudit);
    }

    fn file_output(&self) -> FileOutput {
        FileOutput::new(self.settings.log_file_name.as_str()).append(self.settings.append_logs_ok)
    }

    fn write_file(&self, level: Verbosity, message: &str) {
        if let Err(e) = self.file_output().write(level, message) {
            internal::error("FILE", &format!("Dropped {level} message: {e}"));
        }
    }

    fn write_system_log(&mut self, level: Verbosity, message: &str) {
        let severity = match EventSeverity::try_from(level) {
            Ok(severity) => severity,
            Err(e) => {
                internal::error("EVENTLOG", &format!("Dropped message: {e}"));
                return;
            }
        };
        if self.system_log.is_none() && !self.open_system_log() {
            internal::error("EVENTLOG", &format!("Dropped {level} message: no event source"));
            return;
        }
        if let Err(e) = self.event_log.write_entry(severity, message) {
            internal::error("EVENTLOG", &format!("Dropped {level} message: {e}"));
        }
    }

    /// Opens (or reopens) the event source for the current source name and target.
    fn open_system_log(&mut self) -> bool {
        let source = EventSource {
            source: self.settings.source_name.clone(),
            target: self.settings.win_log_name.clone(),
        };
        match self.event_log.create_source(&source.source, &source.target) {
            Ok(()) => {
                internal::debug(
                    "EVENTLOG",
                    &format!("Source {} bound to {}", source.source, source.target),
                );
                self.system_log = Some(source);
                true
            }
            Err(e) => {
                internal::error("EVENTLOG", &e.to_string());
                self.system_log = None;
                false
            }
        }
    }

    fn close_system_log(&mut self) {
        if self.system_log.take().is_some() {
            self.event_log.close();
        }
    }

    /// Reopens the event source if one is open, so it picks up a new name or target.
    fn rebind_system_log(&mut self) {
        if self.system_log.is_some() {
            self.open_system_log();
        }
    }

    // Getters

    /// Snapshot of every setting.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Highest level that is still written.
    #[must_use]
    pub const fn verbosity_threshold(&self) -> Verbosity {
        self.settings.verbosity_threshold
    }

    /// Sink that receives accepted messages.
    #[must_use]
    pub const fn log_mode(&self) -> LogMode {
        self.settings.mode
    }

    /// Log file name as configured, before `~` expansion.
    #[must_use]
    pub fn log_file_name(&self) -> &str {
        &self.settings.log_file_name
    }

    /// Name of the last config file that loaded successfully.
    #[must_use]
    pub fn config_file_name(&self) -> &str {
        &self.settings.config_file_name
    }

    /// Whether file writes append instead of truncating.
    #[must_use]
    pub const fn append_logs_ok(&self) -> bool {
        self.settings.append_logs_ok
    }

    /// Whether `write_config_file` may write.
    #[must_use]
    pub const fn make_config_file_ok(&self) -> bool {
        self.settings.make_config_file_ok
    }

    /// Identity the event source registers under.
    #[must_use]
    pub fn source_name(&self) -> &str {
        &self.settings.source_name
    }

    /// Host log the event source writes into.
    #[must_use]
    pub const fn win_log_name(&self) -> &LogTarget {
        &self.settings.win_log_name
    }

    /// Whether an event source is currently open.
    #[must_use]
    pub const fn has_system_log(&self) -> bool {
        self.system_log.is_some()
    }

    // Setters

    /// Accepts a `Verbosity`, an ordinal 0–6, or a level name. Anything else is ignored
    /// and `false` returned.
    pub fn set_verbosity_threshold<V: TryInto<Verbosity>>(&mut self, value: V) -> bool {
        let Ok(level) = value.try_into() else {
            internal::debug("LOGGER", "Ignored invalid verbosity threshold");
            return false;
        };
        self.settings.verbosity_threshold = level;
        true
    }

    /// Accepts a `LogMode`, an ordinal 0/1, or a mode name. Switching to the system log
    /// opens the event source; switching back closes it. Setting the current mode again
    /// does nothing. Returns `false` only for values that are not a mode.
    pub fn set_log_mode<M: TryInto<LogMode>>(&mut self, value: M) -> bool {
        let Ok(mode) = value.try_into() else {
            internal::debug("LOGGER", "Ignored invalid log mode");
            return false;
        };
        if mode == self.settings.mode {
            return true;
        }
        self.settings.mode = mode;
        match mode {
            LogMode::ToSystemLog => {
                self.open_system_log();
            }
            LogMode::ToFile => self.close_system_log(),
        }
        internal::debug("LOGGER", &format!("Log mode is now {mode}"));
        true
    }

    /// Only a change has an effect. Either way the log file is opened and closed once to
    /// confirm it is writable; turning appending off truncates the file at that point.
    pub fn set_append_logs_ok(&mut self, append: bool) {
        if append == self.settings.append_logs_ok {
            return;
        }
        self.settings.append_logs_ok = append;
        if let Err(e) = self.file_output().probe() {
            internal::warn("FILE", &format!("Log file not writable: {e}"));
        }
    }

    /// Allows or blocks `write_config_file`.
    pub const fn set_make_config_file_ok(&mut self, allowed: bool) {
        self.settings.make_config_file_ok = allowed;
    }

    /// Empty names and names longer than `MAX_FILE_NAME_LEN` are ignored and `false`
    /// returned.
    pub fn set_log_file_name(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if !is_valid_file_name(&name) {
            internal::warn("LOGGER", "Ignored invalid log file name");
            return false;
        }
        self.settings.log_file_name = name;
        true
    }

    /// Selects the host log. A custom log is registered for the current source right away,
    /// and an open event source is rebound to the new target.
    pub fn set_win_log_name(&mut self, target: LogTarget) {
        if target == self.settings.win_log_name {
            return;
        }
        let is_custom = matches!(target, LogTarget::Custom(_));
        self.settings.win_log_name = target;

        if self.system_log.is_some() || self.settings.mode == LogMode::ToSystemLog {
            self.open_system_log();
        } else if is_custom && self.open_system_log() {
            // Registered; the file sink stays active until the mode changes.
            self.close_system_log();
        }
    }

    /// Shorthand for `set_win_log_name(LogTarget::Custom(..))`.
    pub fn set_custom_win_log(&mut self, log_name: impl Into<String>) {
        self.set_win_log_name(LogTarget::Custom(log_name.into()));
    }

    /// Empty names are ignored and `false` returned. An open event source is rebound.
    pub fn set_source_name(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.is_empty() {
            return false;
        }
        if name != self.settings.source_name {
            self.settings.source_name = name;
            self.rebind_system_log();
        }
        true
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.close_system_log();
    }
}
