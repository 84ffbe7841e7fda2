//! The most common CLI operation: emit one message from a shell script.

use crate::cli::LevelArg;
use crate::config::LogMode;
use crate::internal;
use crate::level::Verbosity;
use crate::logger::Logger;
use std::process::ExitCode;

/// Per-invocation overrides layered on top of the loaded config.
#[derive(Debug, Default)]
pub struct LogOverrides {
    pub file: Option<String>,
    pub threshold: Option<LevelArg>,
    pub system: bool,
    pub truncate: bool,
}

/// Handles `utility-logger log <level> <message...>`.
#[must_use]
pub fn cmd_log(
    logger: &mut Logger,
    level: LevelArg,
    message: &[String],
    overrides: LogOverrides,
) -> ExitCode {
    if let Some(file) = overrides.file
        && !logger.set_log_file_name(file)
    {
        internal::error("CLI", "Invalid log file name");
        return ExitCode::FAILURE;
    }
    if let Some(threshold) = overrides.threshold {
        logger.set_verbosity_threshold(Verbosity::from(threshold));
    }
    if overrides.system {
        logger.set_log_mode(LogMode::ToSystemLog);
    }
    if overrides.truncate {
        logger.set_append_logs_ok(false);
    }

    let level = Verbosity::from(level);
    if !level.passes(logger.verbosity_threshold()) {
        internal::info(
            "CLI",
            &format!(
                "{level} does not pass the threshold ({}); nothing logged",
                logger.verbosity_threshold()
            ),
        );
    }
    logger.log(&message.join(" "), level);
    ExitCode::SUCCESS
}
