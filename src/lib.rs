// Platform event-log backends opt back in locally
#![deny(unsafe_code)]

//! `utility-logger` - threshold-filtered logging to a text file or the host event log.
//!
//! A `Logger` tags each message with a [`Verbosity`], drops it unless it passes the
//! configured threshold, and writes it either as a `<level>\t<message>` line to a log file
//! or as an entry in the host event log (the Win32 event log, or syslog on Unix). Its
//! settings can be loaded from and written to a small key-value config file.
//!
//! # Example
//!
//! ```no_run
//! use utility_logger::{Logger, Verbosity};
//!
//! let mut log = Logger::new();
//! log.initialize();
//! log.set_verbosity_threshold(Verbosity::All);
//! log.set_log_file_name("app.log");
//!
//! log.warning("Disk almost full");
//! log.log("Audit passed", Verbosity::SuccessAudit);
//!
//! let report = log.load_config_file("LoggerConfig.ini");
//! println!("{} setting(s) applied", report.applied);
//! ```
//!
//! # Features
//!
//! - `cli` (default): Builds the `utility-logger` command-line tool

pub mod config;
mod error;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::{LoadReport, LogMode, LogTarget, Settings, WriteOutcome};
pub use error::Error;
pub use level::Verbosity;
pub use logger::Logger;
pub use output::{EventLog, EventSeverity, MemoryEventLog, NoopEventLog};
