//! Verbosity levels that tag each message and gate it against the configured threshold.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordinals follow the host event-log vocabulary, from "log nothing" up to "log everything".
///
/// The ordinal is a ceiling: a message passes when its level is not `None` and does not
/// exceed the threshold, so `All` admits every level and `Information` admits only itself.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// As a threshold, disables logging. As a message level, is never written.
    None = 0,
    #[default]
    Information = 1,
    Warning = 2,
    Error = 3,
    SuccessAudit = 4,
    FailureAudit = 5,
    /// Admits every message; has no event-log severity of its own.
    All = 6,
}

impl Verbosity {
    /// Canonical lowercase name, shared by the log line format and the config file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Information => "information",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::SuccessAudit => "successaudit",
            Self::FailureAudit => "failureaudit",
            Self::All => "all",
        }
    }

    /// Inverse of `as u8`; `None` for anything outside 0..=6.
    #[must_use]
    pub const fn from_ordinal(ordinal: i64) -> Option<Self> {
        match ordinal {
            0 => Some(Self::None),
            1 => Some(Self::Information),
            2 => Some(Self::Warning),
            3 => Some(Self::Error),
            4 => Some(Self::SuccessAudit),
            5 => Some(Self::FailureAudit),
            6 => Some(Self::All),
            _ => None,
        }
    }

    /// Numeric value, 0 for `None` through 6 for `All`.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// The filter law: `None` never logs, everything else logs up to and including `threshold`.
    #[must_use]
    pub fn passes(self, threshold: Self) -> bool {
        self != Self::None && self <= threshold
    }

    /// Every level in ordinal order, for help output and tests.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::None,
            Self::Information,
            Self::Warning,
            Self::Error,
            Self::SuccessAudit,
            Self::FailureAudit,
            Self::All,
        ]
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name or ordinal does not denote one of the seven levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVerbosityError(String);

impl fmt::Display for ParseVerbosityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown verbosity: '{}'", self.0)
    }
}

impl std::error::Error for ParseVerbosityError {}

/// Exact lowercase names only; numeric strings are rejected.
impl FromStr for Verbosity {
    type Err = ParseVerbosityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ParseVerbosityError(s.to_string()))
    }
}

impl TryFrom<&str> for Verbosity {
    type Error = ParseVerbosityError;

    fn try_from(s: &str) -> Result<Self, ParseVerbosityError> {
        s.parse()
    }
}

impl TryFrom<i32> for Verbosity {
    type Error = ParseVerbosityError;

    fn try_from(ordinal: i32) -> Result<Self, ParseVerbosityError> {
        Self::from_ordinal(i64::from(ordinal)).ok_or_else(|| ParseVerbosityError(ordinal.to_string()))
    }
}
