//! Loading settings from, and saving them to, the key-value config file.

use super::Logger;
use crate::config::{
    self, DEFAULT_CONFIG_FILE_NAME, Entry, LoadReport, Property, WriteOutcome, expand_path,
    is_valid_file_name, parse_bool,
};
use crate::internal;
use std::fs;
use std::path::PathBuf;

fn read_config(name: &str) -> Result<(PathBuf, String), crate::Error> {
    let path = expand_path(name);
    match fs::read(&path) {
        Ok(bytes) => Ok((path, String::from_utf8_lossy(&bytes).into_owned())),
        Err(source) => Err(crate::Error::Open { path, source }),
    }
}

impl Logger {
    /// Reads `file_name` (or, if it cannot be opened, the default config file) and applies
    /// every recognized setting through the regular setters, last occurrence winning.
    ///
    /// When at least one setting applies, `file_name` becomes the config file name.
    /// When none does, settings and the config file name are left as they were.
    pub fn load_config_file(&mut self, file_name: &str) -> LoadReport {
        let requested = if is_valid_file_name(file_name) {
            file_name
        } else {
            internal::warn(
                "CONFIG",
                &format!("Config file name rejected, using {DEFAULT_CONFIG_FILE_NAME}"),
            );
            DEFAULT_CONFIG_FILE_NAME
        };

        let mut report = LoadReport {
            path: None,
            fell_back: false,
            applied: 0,
            rejected: 0,
        };

        let content = match read_config(requested) {
            Ok((path, content)) => {
                report.path = Some(path);
                content
            }
            Err(e) => {
                internal::warn("CONFIG", &format!("{e}"));
                if requested == DEFAULT_CONFIG_FILE_NAME {
                    return report;
                }
                report.fell_back = true;
                match read_config(DEFAULT_CONFIG_FILE_NAME) {
                    Ok((path, content)) => {
                        report.path = Some(path);
                        content
                    }
                    Err(e) => {
                        internal::warn("CONFIG", &format!("{e}"));
                        return report;
                    }
                }
            }
        };

        let parsed = config::parse(&content);
        report.rejected = parsed.rejected.len();
        for entry in &parsed.entries {
            if self.apply(entry) {
                report.applied += 1;
            } else {
                internal::warn(
                    "CONFIG",
                    &format!("Invalid value for {}: {}", entry.property, entry.value),
                );
                report.rejected += 1;
            }
        }

        if report.is_success() {
            self.settings.config_file_name = requested.to_string();
            internal::info(
                "CONFIG",
                &format!(
                    "Loaded {} setting(s) from {}",
                    report.applied,
                    report.path.as_ref().map_or_else(String::new, |p| p.display().to_string())
                ),
            );
        } else {
            internal::warn("CONFIG", &format!("No valid settings found for {requested}"));
        }
        report
    }

    /// Same as `load_config_file`.
    pub fn set_config_file_name(&mut self, file_name: &str) -> LoadReport {
        self.load_config_file(file_name)
    }

    fn apply(&mut self, entry: &Entry) -> bool {
        let value = entry.value.as_str();
        match entry.property {
            Property::LogFileName => self.set_log_file_name(value),
            Property::LogMode => self.set_log_mode(value),
            Property::Verbosity => self.set_verbosity_threshold(value),
            Property::AppendLogsOk => {
                let Some(flag) = parse_bool(value) else {
                    return false;
                };
                self.set_append_logs_ok(flag);
                true
            }
            Property::MakeConfigFileOk => {
                let Some(flag) = parse_bool(value) else {
                    return false;
                };
                self.set_make_config_file_ok(flag);
                true
            }
        }
    }

    /// Writes the five file-backed settings to `file_name`, or to the current config file
    /// name when `None`. Does nothing and returns `Declined` unless `make_config_file_ok`.
    ///
    /// # Errors
    /// `Error::Unrepresentable` if the log file name contains whitespace, `Error::Open` if
    /// the file cannot be written.
    pub fn write_config_file(&self, file_name: Option<&str>) -> Result<WriteOutcome, crate::Error> {
        let name = file_name
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.settings.config_file_name);
        if !self.settings.make_config_file_ok {
            internal::warn(
                "CONFIG",
                "make_config_file_ok is false; config file not written",
            );
            return Ok(WriteOutcome::Declined);
        }
        let content = config::render(&self.settings)?;

        let path = expand_path(name);
        fs::write(&path, content).map_err(|source| crate::Error::Open {
            path: path.clone(),
            source,
        })?;
        internal::info("CONFIG", &format!("Config file {} written", path.display()));
        Ok(WriteOutcome::Written(path))
    }
}
