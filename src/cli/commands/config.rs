//! `write-config` and `show`: exporting the active settings.

use crate::config::WriteOutcome;
use crate::internal;
use crate::logger::Logger;
use std::process::ExitCode;

/// Handles `utility-logger write-config [PATH]`.
#[must_use]
pub fn cmd_write_config(logger: &Logger, path: Option<&str>) -> ExitCode {
    match logger.write_config_file(path) {
        Ok(WriteOutcome::Written(path)) => {
            println!("Config file {} written", path.display());
            ExitCode::SUCCESS
        }
        Ok(WriteOutcome::Declined) => {
            internal::error(
                "CLI",
                "make_config_file_ok is false in the loaded config; nothing written",
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            internal::error("CLI", &format!("{e}"));
            ExitCode::FAILURE
        }
    }
}

/// Handles `utility-logger show [--json]`.
#[must_use]
pub fn cmd_show(logger: &Logger, json: bool) -> ExitCode {
    let settings = logger.settings();
    if json {
        return match serde_json::to_string_pretty(settings) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                internal::error("CLI", &format!("Cannot serialize settings: {e}"));
                ExitCode::FAILURE
            }
        };
    }

    println!("log_file_name\t{}", settings.log_file_name);
    println!("log_mode\t{}", settings.mode);
    println!("verbosity\t{}", settings.verbosity_threshold);
    println!("append_logs_ok\t{}", settings.append_logs_ok);
    println!("make_config_file_ok\t{}", settings.make_config_file_ok);
    println!("config_file_name\t{}", settings.config_file_name);
    println!("source_name\t{}", settings.source_name);
    println!("win_log_name\t{}", settings.win_log_name);
    ExitCode::SUCCESS
}
