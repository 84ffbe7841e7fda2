//! `utility-logger` - log messages to a file or the system event log from the shell.
//!
//! Usage:
//!   utility-logger [-c FILE] log <level> <message...> [--file F] [--threshold L] [--system] [--truncate]
//!   utility-logger [-c FILE] write-config [PATH]
//!   utility-logger [-c FILE] show [--json]
//!   utility-logger selftest [--dir DIR]

use clap::Parser;
use std::process::ExitCode;
use utility_logger::cli::commands::LogOverrides;
use utility_logger::cli::{
    Cli, Command, build_logger, cmd_log, cmd_selftest, cmd_show, cmd_write_config,
};
use utility_logger::{Logger, internal};

fn main() -> ExitCode {
    let cli = Cli::parse();
    internal::init();

    match cli.command {
        // Runs without a config file
        Command::Selftest { dir } => cmd_selftest(&dir),
        command => match build_logger(cli.config.as_deref()) {
            Ok(mut logger) => run(command, &mut logger),
            Err(name) => {
                internal::error("CLI", &format!("No settings could be loaded from {name}"));
                ExitCode::FAILURE
            }
        },
    }
}

fn run(command: Command, logger: &mut Logger) -> ExitCode {
    match command {
        Command::Log {
            level,
            message,
            file,
            threshold,
            system,
            truncate,
        } => cmd_log(
            logger,
            level,
            &message,
            LogOverrides {
                file,
                threshold,
                system,
                truncate,
            },
        ),
        Command::WriteConfig { path } => cmd_write_config(logger, path.as_deref()),
        Command::Show { json } => cmd_show(logger, json),
        Command::Selftest { dir } => cmd_selftest(&dir),
    }
}
