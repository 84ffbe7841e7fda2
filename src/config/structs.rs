//! Configuration data model: the settings a `Logger` owns and the enums they range over.

use crate::level::Verbosity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_LOG_FILE_NAME: &str = "LoggerDefault.log";
pub const DEFAULT_CONFIG_FILE_NAME: &str = "LoggerConfig.ini";
pub const DEFAULT_SOURCE_NAME: &str = "YourCPPApplication";

/// Longest file name a setter accepts, in bytes (glibc's `FILENAME_MAX`).
pub const MAX_FILE_NAME_LEN: usize = 4096;

/// Which sink receives accepted messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LogMode {
    #[default]
    #[serde(rename = "to_log")]
    ToFile = 0,
    #[serde(rename = "to_system")]
    ToSystemLog = 1,
}

impl LogMode {
    /// Name used in config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToFile => "to_log",
            Self::ToSystemLog => "to_system",
        }
    }

    /// Mode for ordinal 0 or 1; `None` otherwise.
    #[must_use]
    pub const fn from_ordinal(ordinal: i64) -> Option<Self> {
        match ordinal {
            0 => Some(Self::ToFile),
            1 => Some(Self::ToSystemLog),
            _ => None,
        }
    }

    /// Both modes in ordinal order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::ToFile, Self::ToSystemLog]
    }
}

impl fmt::Display for LogMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name or ordinal does not denote a log mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError(String);

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log mode: '{}'", self.0)
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for LogMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

impl TryFrom<&str> for LogMode {
    type Error = ParseModeError;

    fn try_from(s: &str) -> Result<Self, ParseModeError> {
        s.parse()
    }
}

impl TryFrom<i32> for LogMode {
    type Error = ParseModeError;

    fn try_from(ordinal: i32) -> Result<Self, ParseModeError> {
        Self::from_ordinal(i64::from(ordinal)).ok_or_else(|| ParseModeError(ordinal.to_string()))
    }
}

/// The host log an event source writes into.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    #[default]
    Application,
    System,
    /// A named log created on demand alongside the event source.
    Custom(String),
}

impl LogTarget {
    /// The host-facing log name ("Application", "System", or the custom name).
    #[must_use]
    pub fn log_name(&self) -> &str {
        match self {
            Self::Application => "Application",
            Self::System => "System",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for LogTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.log_name())
    }
}

/// Everything a `Logger` can be configured with. `Default` is the state `initialize` restores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log_file_name: String,
    pub config_file_name: String,
    pub mode: LogMode,
    pub verbosity_threshold: Verbosity,
    /// `false` makes every write start a fresh file.
    pub append_logs_ok: bool,
    /// Gates `write_config_file`.
    pub make_config_file_ok: bool,
    /// Identity the event source registers under.
    pub source_name: String,
    pub win_log_name: LogTarget,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file_name: DEFAULT_LOG_FILE_NAME.to_string(),
            config_file_name: DEFAULT_CONFIG_FILE_NAME.to_string(),
            mode: LogMode::default(),
            verbosity_threshold: Verbosity::Information,
            append_logs_ok: true,
            make_config_file_ok: true,
            source_name: DEFAULT_SOURCE_NAME.to_string(),
            win_log_name: LogTarget::default(),
        }
    }
}

/// Tri-state boolean parse: only the literals `true` and `false` are booleans.
#[must_use]
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Shared length/emptiness rule for every file name the logger stores.
#[must_use]
pub const fn is_valid_file_name(name: &str) -> bool {
    !name.is_empty() && name.len() <= MAX_FILE_NAME_LEN
}
