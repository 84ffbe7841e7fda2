//! The key-value configuration file: tokenizing, property lookup, rendering.
//!
//! Applying parsed entries goes through the logger's setters, in `logger::from_config`.

mod structs;

pub use structs::{
    DEFAULT_CONFIG_FILE_NAME, DEFAULT_LOG_FILE_NAME, DEFAULT_SOURCE_NAME, LogMode, LogTarget,
    MAX_FILE_NAME_LEN, ParseModeError, Settings, is_valid_file_name, parse_bool,
};

use crate::internal;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// The five settings a config file can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    LogFileName,
    LogMode,
    Verbosity,
    AppendLogsOk,
    MakeConfigFileOk,
}

impl Property {
    /// Key as written in config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LogFileName => "log_file_name",
            Self::LogMode => "log_mode",
            Self::Verbosity => "verbosity",
            Self::AppendLogsOk => "append_logs_ok",
            Self::MakeConfigFileOk => "make_config_file_ok",
        }
    }

    /// Written in this order by `render`.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::LogFileName,
            Self::LogMode,
            Self::Verbosity,
            Self::AppendLogsOk,
            Self::MakeConfigFileOk,
        ]
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Property names are matched exactly.
impl FromStr for Property {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all().into_iter().find(|p| p.as_str() == s).ok_or(())
    }
}

/// One recognized `<property> <value>` pair, value not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub property: Property,
    pub value: String,
}

/// Result of tokenizing a config file. Unknown names and a trailing unpaired token land in
/// `rejected`; value validation happens later, when entries are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedConfig {
    pub entries: Vec<Entry>,
    pub rejected: Vec<String>,
}

/// Splits `content` on any whitespace and consumes tokens two at a time.
#[must_use]
pub fn parse(content: &str) -> ParsedConfig {
    let mut parsed = ParsedConfig::default();
    let mut tokens = content.split_whitespace();

    while let Some(name) = tokens.next() {
        let Some(value) = tokens.next() else {
            internal::warn("CONFIG", &format!("Dangling token without a value: {name}"));
            parsed.rejected.push(name.to_string());
            break;
        };

        if let Ok(property) = name.parse::<Property>() {
            parsed.entries.push(Entry {
                property,
                value: value.to_string(),
            });
        } else {
            internal::warn("CONFIG", &format!("Not a valid configuration: {name} {value}"));
            parsed.rejected.push(format!("{name} {value}"));
        }
    }

    parsed
}

/// Renders the five recognized properties as `<name>\t<value>` lines, using the same
/// names `parse` and the setters accept.
///
/// # Errors
/// `Error::Unrepresentable` if the log file name contains whitespace, since it could
/// not be read back as a single token.
pub fn render(settings: &Settings) -> Result<String, crate::Error> {
    if settings.log_file_name.chars().any(char::is_whitespace) {
        return Err(crate::Error::Unrepresentable(settings.log_file_name.clone()));
    }

    let mut out = String::new();
    for property in Property::all() {
        let value = match property {
            Property::LogFileName => settings.log_file_name.clone(),
            Property::LogMode => settings.mode.as_str().to_string(),
            Property::Verbosity => settings.verbosity_threshold.as_str().to_string(),
            Property::AppendLogsOk => settings.append_logs_ok.to_string(),
            Property::MakeConfigFileOk => settings.make_config_file_ok.to_string(),
        };
        out.push_str(property.as_str());
        out.push('\t');
        out.push_str(&value);
        out.push('\n');
    }
    Ok(out)
}

/// Expands a leading `~` so configured names can point into the home directory.
#[must_use]
pub fn expand_path(name: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(name).as_ref())
}

/// What `Logger::load_config_file` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// The file actually read, if any could be opened.
    pub path: Option<PathBuf>,
    /// Whether the requested file was unreadable and the default name was tried instead.
    pub fell_back: bool,
    /// Settings successfully applied, duplicates included.
    pub applied: usize,
    /// Unknown properties, invalid values, and dangling tokens.
    pub rejected: usize,
}

impl LoadReport {
    /// A load succeeds when at least one setting was applied.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.applied > 0
    }
}

/// What `Logger::write_config_file` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written(PathBuf),
    /// `make_config_file_ok` was false; nothing touched the filesystem.
    Declined,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_pairs_across_lines() {
        let parsed = parse("log_file_name a.log log_mode\nto_log\n\tverbosity  all\n");
        assert_eq!(parsed.entries.len(), 3);
        assert_eq!(parsed.entries[1].property, Property::LogMode);
        assert_eq!(parsed.entries[1].value, "to_log");
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn parse_rejects_unknown_names_and_keeps_going() {
        let parsed = parse("colour blue verbosity warning");
        assert_eq!(parsed.rejected, vec!["colour blue".to_string()]);
        assert_eq!(parsed.entries.len(), 1);
    }

    #[test]
    fn parse_rejects_dangling_token() {
        let parsed = parse("verbosity error append_logs_ok");
        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(parsed.rejected, vec!["append_logs_ok".to_string()]);
    }

    #[test]
    fn property_names_are_case_sensitive() {
        assert!("Verbosity".parse::<Property>().is_err());
        assert_eq!("verbosity".parse::<Property>(), Ok(Property::Verbosity));
    }

    #[test]
    fn render_emits_five_tab_separated_lines() {
        let text = render(&Settings::default()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "log_file_name\tLoggerDefault.log",
                "log_mode\tto_log",
                "verbosity\tinformation",
                "append_logs_ok\ttrue",
                "make_config_file_ok\ttrue",
            ]
        );
    }

    #[test]
    fn render_refuses_names_with_whitespace() {
        let settings = Settings {
            log_file_name: "my log.txt".to_string(),
            ..Settings::default()
        };
        assert!(matches!(
            render(&settings),
            Err(crate::Error::Unrepresentable(_))
        ));
    }
}
