use std::fs;
use tempfile::TempDir;
use utility_logger::{Logger, MemoryEventLog, Verbosity};

fn logger_for(path: &std::path::Path) -> Logger {
    let mut logger = Logger::with_event_log(MemoryEventLog::new());
    logger.initialize();
    assert!(logger.set_log_file_name(path.to_string_lossy()));
    logger
}

#[test]
fn writes_level_tab_message_lines() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("out.log");
    let mut logger = logger_for(&path);
    logger.set_verbosity_threshold(Verbosity::All);

    logger.error("disk failure");
    logger.success_audit("login ok");

    let content = fs::read_to_string(path).unwrap();
    assert_eq!(content, "error\tdisk failure\nsuccessaudit\tlogin ok\n");
}

#[test]
fn truncate_then_append_keeps_both_lines() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("t.log");
    fs::write(&path, "stale line\n").unwrap();

    let mut logger = logger_for(&path);
    logger.set_verbosity_threshold(Verbosity::All);
    logger.set_append_logs_ok(false);
    logger.warning("Line A");
    logger.set_append_logs_ok(true);
    logger.information("Line B");

    let content = fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, vec!["warning\tLine A", "information\tLine B"]);
}

#[test]
fn disabling_append_truncates_immediately() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("t.log");
    fs::write(&path, "old content\n").unwrap();

    let mut logger = logger_for(&path);
    logger.set_append_logs_ok(false);

    assert_eq!(fs::read_to_string(path).unwrap(), "");
}

#[test]
fn non_append_mode_keeps_only_the_latest_line() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("t.log");

    let mut logger = logger_for(&path);
    logger.set_append_logs_ok(false);
    logger.information("one");
    logger.information("two");

    assert_eq!(fs::read_to_string(path).unwrap(), "information\ttwo\n");
}

#[test]
fn append_mode_preserves_prior_content() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("t.log");
    fs::write(&path, "information\tearlier\n").unwrap();

    let mut logger = logger_for(&path);
    logger.information("later");

    let content = fs::read_to_string(path).unwrap();
    assert_eq!(content, "information\tearlier\ninformation\tlater\n");
}

#[test]
fn re_enabling_append_does_not_truncate() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("t.log");

    let mut logger = logger_for(&path);
    logger.set_append_logs_ok(false);
    logger.information("kept");
    logger.set_append_logs_ok(true);

    assert_eq!(fs::read_to_string(path).unwrap(), "information\tkept\n");
}

#[test]
fn unwritable_file_drops_message_without_panicking() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("no-such-dir").join("t.log");

    let mut logger = logger_for(&path);
    logger.information("lost");
    logger.set_append_logs_ok(false);
    logger.warning("also lost");

    assert!(!path.exists());
}

#[test]
fn switching_file_name_redirects_output() {
    let tmp_dir = TempDir::new().unwrap();
    let first = tmp_dir.path().join("first.log");
    let second = tmp_dir.path().join("second.log");

    let mut logger = logger_for(&first);
    logger.information("to first");
    logger.set_log_file_name(second.to_string_lossy());
    logger.information("to second");

    assert_eq!(fs::read_to_string(first).unwrap(), "information\tto first\n");
    assert_eq!(fs::read_to_string(second).unwrap(), "information\tto second\n");
}
