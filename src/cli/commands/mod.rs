//! Subcommand handlers, one file per command.

mod config;
mod log;
mod selftest;

pub use config::{cmd_show, cmd_write_config};
pub use log::{LogOverrides, cmd_log};
pub use selftest::cmd_selftest;
