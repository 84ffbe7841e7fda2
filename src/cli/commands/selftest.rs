//! `selftest`: walks a throwaway logger through accessors, config files, and every log
//! method, printing PASS/FAIL per check. System-log checks use an in-memory event log so
//! they run without administrative rights.

use crate::config::{DEFAULT_CONFIG_FILE_NAME, LogMode, LogTarget, WriteOutcome};
use crate::level::Verbosity;
use crate::logger::Logger;
use crate::output::MemoryEventLog;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

#[derive(Default)]
struct Tally {
    failed: usize,
}

impl Tally {
    fn check(&mut self, name: &str, ok: bool) {
        if ok {
            println!("PASS {name}");
        } else {
            println!("FAIL {name}");
            self.failed += 1;
        }
    }
}

fn scratch(dir: &Path, name: &str) -> String {
    dir.join(name).to_string_lossy().into_owned()
}

fn accessors(dir: &Path, tally: &mut Tally) {
    let mut log = Logger::with_event_log(MemoryEventLog::new());
    log.initialize();

    log.set_verbosity_threshold(Verbosity::All);
    tally.check("verbosity_threshold", log.verbosity_threshold() == Verbosity::All);

    let recent = scratch(dir, "RecentLog.log");
    log.set_log_file_name(recent.as_str());
    tally.check("log_file_name", log.log_file_name() == recent);

    log.set_log_mode(LogMode::ToSystemLog);
    tally.check("log_mode", log.log_mode() == LogMode::ToSystemLog);

    log.set_win_log_name(LogTarget::Application);
    tally.check("win_log_name", *log.win_log_name() == LogTarget::Application);

    tally.check(
        "default config_file_name",
        log.config_file_name() == DEFAULT_CONFIG_FILE_NAME,
    );

    let config = scratch(dir, "LogAccessorConfig");
    let written = log.write_config_file(Some(&config));
    let loaded = log.set_config_file_name(&config);
    tally.check(
        "config_file_name change",
        matches!(written, Ok(WriteOutcome::Written(_)))
            && loaded.is_success()
            && log.config_file_name() == config,
    );
}

fn config_methods(dir: &Path, tally: &mut Tally) {
    let mut log = Logger::with_event_log(MemoryEventLog::new());
    log.initialize();

    log.set_make_config_file_ok(false);
    let declined = scratch(dir, "Declined.ini");
    tally.check(
        "write declined when make_config_file_ok is false",
        matches!(log.write_config_file(Some(&declined)), Ok(WriteOutcome::Declined))
            && !Path::new(&declined).exists(),
    );

    log.set_make_config_file_ok(true);
    log.set_verbosity_threshold(Verbosity::FailureAudit);
    log.set_log_mode(LogMode::ToSystemLog);
    let config = scratch(dir, "TestConfigName2.ini");
    let written = matches!(log.write_config_file(Some(&config)), Ok(WriteOutcome::Written(_)));

    let mut fresh = Logger::with_event_log(MemoryEventLog::new());
    let report = fresh.load_config_file(&config);
    tally.check(
        "config round trip",
        written
            && report.applied == 5
            && fresh.verbosity_threshold() == Verbosity::FailureAudit
            && fresh.log_mode() == LogMode::ToSystemLog,
    );

    log.set_log_mode(LogMode::ToFile);
    let append_test = scratch(dir, "AppendLogsTest.test");
    log.set_log_file_name(append_test.as_str());
    log.set_verbosity_threshold(Verbosity::All);
    log.set_append_logs_ok(false);
    log.warning("Should be at top of log Line A");
    log.set_append_logs_ok(true);
    log.information("Logged to the bottom after Line A");

    let content = fs::read_to_string(&append_test).unwrap_or_default();
    tally.check(
        "truncate then append",
        content
            == "warning\tShould be at top of log Line A\n\
                information\tLogged to the bottom after Line A\n",
    );
}

fn log_methods(dir: &Path, tally: &mut Tally) {
    let mut log = Logger::with_event_log(MemoryEventLog::new());
    log.initialize();
    log.set_log_mode(LogMode::ToFile);
    let file = scratch(dir, "log methods.test");
    log.set_log_file_name(file.as_str());
    log.set_append_logs_ok(false);
    log.set_verbosity_threshold(Verbosity::All);

    log.warning("Warning to Application log");
    log.set_append_logs_ok(true);
    log.error("An Error");
    log.information("Some Info");
    log.success_audit("A successful audit");
    log.failure_audit("now a failing audit");

    let content = fs::read_to_string(&file).unwrap_or_default();
    let levels: Vec<&str> = content
        .lines()
        .filter_map(|line| line.split('\t').next())
        .collect();
    tally.check(
        "log methods",
        levels
            == [
                "warning",
                "error",
                "information",
                "successaudit",
                "failureaudit",
            ],
    );

    let events = MemoryEventLog::new();
    let mut system = Logger::with_event_log(events.clone());
    system.set_log_mode(LogMode::ToSystemLog);
    system.set_verbosity_threshold(Verbosity::All);
    system.error("An Error");
    system.log("no severity for this one", Verbosity::All);
    tally.check("system log", events.entries().len() == 1);
}

/// Handles `utility-logger selftest [--dir DIR]`.
#[must_use]
pub fn cmd_selftest(dir: &Path) -> ExitCode {
    if let Err(e) = fs::create_dir_all(dir) {
        eprintln!("Cannot create {}: {e}", dir.display());
        return ExitCode::FAILURE;
    }

    let mut tally = Tally::default();
    accessors(dir, &mut tally);
    config_methods(dir, &mut tally);
    log_methods(dir, &mut tally);

    if tally.failed == 0 {
        ExitCode::SUCCESS
    } else {
        println!("{} check(s) failed", tally.failed);
        ExitCode::FAILURE
    }
}
