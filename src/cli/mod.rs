//! CLI module for utility-logger.
//!
//! This module provides the command-line interface using Clap.

pub mod commands;
pub mod util;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Verbosity level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LevelArg {
    None,
    Information,
    Warning,
    Error,
    #[value(name = "successaudit")]
    SuccessAudit,
    #[value(name = "failureaudit")]
    FailureAudit,
    All,
}

impl From<LevelArg> for crate::level::Verbosity {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::None => Self::None,
            LevelArg::Information => Self::Information,
            LevelArg::Warning => Self::Warning,
            LevelArg::Error => Self::Error,
            LevelArg::SuccessAudit => Self::SuccessAudit,
            LevelArg::FailureAudit => Self::FailureAudit,
            LevelArg::All => Self::All,
        }
    }
}

/// utility-logger - Log messages to a file or the system event log.
#[derive(Parser)]
#[command(
    name = "utility-logger",
    version,
    about = "Log messages to a file or the system event log"
)]
pub struct Cli {
    /// Config file to load before running the command
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Log a message.
    Log {
        /// Message verbosity
        #[arg(value_enum)]
        level: LevelArg,
        /// Message text
        #[arg(required = true)]
        message: Vec<String>,
        /// Log file to write to
        #[arg(short, long, value_name = "FILE")]
        file: Option<String>,
        /// Override the verbosity threshold
        #[arg(short, long, value_enum)]
        threshold: Option<LevelArg>,
        /// Write to the system event log instead of a file
        #[arg(long)]
        system: bool,
        /// Start the log file afresh
        #[arg(long)]
        truncate: bool,
    },
    /// Write the current configuration to a config file.
    WriteConfig {
        /// Destination (defaults to the active config file name)
        path: Option<String>,
    },
    /// Print the current configuration.
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Exercise accessors, config files, and log methods in a scratch directory.
    Selftest {
        /// Directory for the files the self-test creates
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

pub use commands::{cmd_log, cmd_selftest, cmd_show, cmd_write_config};
pub use util::build_logger;
