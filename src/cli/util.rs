//! Utility functions for the CLI.

use crate::internal;
use crate::logger::Logger;

/// Builds a logger with default settings, then applies `config` if given.
///
/// # Errors
/// Returns the config file name when it was given but nothing could be loaded from it.
pub fn build_logger(config: Option<&str>) -> Result<Logger, String> {
    let mut logger = Logger::new();
    if let Some(name) = config {
        let report = logger.load_config_file(name);
        if !report.is_success() {
            return Err(name.to_string());
        }
        internal::debug(
            "CLI",
            &format!(
                "{} setting(s) applied, {} rejected",
                report.applied, report.rejected
            ),
        );
    }
    Ok(logger)
}
