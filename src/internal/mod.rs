//! The crate's own diagnostic channel, kept apart from whatever sink a `Logger` targets so
//! that a failing file or event log is still observable.
//!
//! Lines go to stderr as `<timestamp> <LEVEL> <SCOPE>  <msg>`. The channel is process-wide
//! and initialized once, either explicitly or lazily from `UTILITY_LOGGER_DIAG`.

use chrono::Local;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::OnceLock;

/// Environment variable holding the minimum diagnostic level (`off`, `error`, `warn`, ...).
pub const ENV_VAR: &str = "UTILITY_LOGGER_DIAG";

/// Severity of a diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl DiagLevel {
    /// Uppercase label used in the level column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for DiagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiagLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            other => Err(other.to_string()),
        }
    }
}

/// `None` silences the channel.
static MIN_LEVEL: OnceLock<Option<DiagLevel>> = OnceLock::new();

/// Reads `UTILITY_LOGGER_DIAG`; unset or unparseable values mean `warn`.
#[must_use]
pub fn level_from_env() -> Option<DiagLevel> {
    std::env::var(ENV_VAR)
        .ok()
        .map_or(Some(DiagLevel::Warn), |value| parse_filter(&value))
}

/// `off`/`none` disable the channel; anything unrecognized falls back to `warn`.
#[must_use]
pub fn parse_filter(value: &str) -> Option<DiagLevel> {
    match value.trim().to_lowercase().as_str() {
        "off" | "none" => None,
        other => Some(other.parse().unwrap_or(DiagLevel::Warn)),
    }
}

/// Initializes from the environment. Only the first initialization takes effect.
pub fn init() {
    MIN_LEVEL.get_or_init(level_from_env);
}

/// Initializes with an explicit minimum level. Returns `false` if the channel was
/// already initialized, in which case the existing level is kept.
pub fn init_with_level(level: Option<DiagLevel>) -> bool {
    MIN_LEVEL.set(level).is_ok()
}

/// Whether a line at `level` would be written.
#[must_use]
pub fn enabled(level: DiagLevel) -> bool {
    MIN_LEVEL
        .get_or_init(level_from_env)
        .is_some_and(|min| level >= min)
}

/// Write failures on stderr are swallowed; there is nowhere left to report them.
fn log(level: DiagLevel, scope: &str, msg: &str) {
    if !enabled(level) {
        return;
    }
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let line = format!("{timestamp} {:<5} {scope}  {msg}\n", level.as_str());
    let _ = io::stderr().lock().write_all(line.as_bytes());
}

/// Fine-grained tracing, such as file probes.
pub fn trace(scope: &str, msg: &str) {
    log(DiagLevel::Trace, scope, msg);
}

/// State changes: mode switches, source bindings.
pub fn debug(scope: &str, msg: &str) {
    log(DiagLevel::Debug, scope, msg);
}

/// Completed operations: config loaded or written.
pub fn info(scope: &str, msg: &str) {
    log(DiagLevel::Info, scope, msg);
}

/// Recoverable problems: rejected config entries, unreadable files.
pub fn warn(scope: &str, msg: &str) {
    log(DiagLevel::Warn, scope, msg);
}

/// Dropped messages and sink failures.
pub fn error(scope: &str, msg: &str) {
    log(DiagLevel::Error, scope, msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_values() {
        assert_eq!(parse_filter("off"), None);
        assert_eq!(parse_filter("NONE"), None);
        assert_eq!(parse_filter("debug"), Some(DiagLevel::Debug));
        assert_eq!(parse_filter(" Error "), Some(DiagLevel::Error));
        assert_eq!(parse_filter("loud"), Some(DiagLevel::Warn));
    }

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(DiagLevel::Trace < DiagLevel::Debug);
        assert!(DiagLevel::Warn < DiagLevel::Error);
    }
}
