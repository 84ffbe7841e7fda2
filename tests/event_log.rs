use utility_logger::output::RecordedEntry;
use utility_logger::{
    EventSeverity, LogMode, LogTarget, Logger, MemoryEventLog, NoopEventLog, Verbosity,
};

fn system_logger(events: &MemoryEventLog) -> Logger {
    let mut logger = Logger::with_event_log(events.clone());
    logger.set_verbosity_threshold(Verbosity::All);
    logger.set_log_mode(LogMode::ToSystemLog);
    logger
}

#[test]
fn levels_map_to_host_severities() {
    let events = MemoryEventLog::new();
    let mut logger = system_logger(&events);

    logger.information("i");
    logger.warning("w");
    logger.error("e");
    logger.success_audit("s");
    logger.failure_audit("f");

    let severities: Vec<EventSeverity> = events.entries().iter().map(|e| e.severity).collect();
    assert_eq!(
        severities,
        vec![
            EventSeverity::Information,
            EventSeverity::Warning,
            EventSeverity::Error,
            EventSeverity::SuccessAudit,
            EventSeverity::FailureAudit,
        ]
    );
}

#[test]
fn entries_carry_source_target_and_text() {
    let events = MemoryEventLog::new();
    let mut logger = system_logger(&events);

    logger.error("disk failure");

    assert_eq!(
        events.entries(),
        vec![RecordedEntry {
            source: "YourCPPApplication".to_string(),
            target: LogTarget::Application,
            severity: EventSeverity::Error,
            text: "disk failure".to_string(),
        }]
    );
}

#[test]
fn all_level_messages_are_dropped() {
    let events = MemoryEventLog::new();
    let mut logger = system_logger(&events);

    logger.log("no mapping", Verbosity::All);
    logger.log("never passes", Verbosity::None);

    assert!(events.entries().is_empty());
}

#[test]
fn threshold_applies_to_event_log() {
    let events = MemoryEventLog::new();
    let mut logger = system_logger(&events);
    logger.set_verbosity_threshold(Verbosity::Warning);

    logger.information("kept");
    logger.warning("kept");
    logger.error("filtered");
    logger.failure_audit("filtered");

    assert_eq!(events.entries().len(), 2);
}

#[test]
fn backend_failures_are_absorbed() {
    let events = MemoryEventLog::new();
    let mut logger = system_logger(&events);
    events.set_failing(true);

    logger.error("lost");
    logger.warning("lost too");

    events.set_failing(false);
    logger.error("delivered");
    assert_eq!(events.entries().len(), 1);
    assert_eq!(events.entries()[0].text, "delivered");
}

#[test]
fn changing_target_rebinds_open_source() {
    let events = MemoryEventLog::new();
    let mut logger = system_logger(&events);

    logger.information("to application");
    logger.set_win_log_name(LogTarget::System);
    logger.information("to system");

    let targets: Vec<LogTarget> = events.entries().into_iter().map(|e| e.target).collect();
    assert_eq!(targets, vec![LogTarget::Application, LogTarget::System]);
    assert_eq!(logger.win_log_name(), &LogTarget::System);
}

#[test]
fn setting_same_target_does_not_rebind() {
    let events = MemoryEventLog::new();
    let mut logger = system_logger(&events);
    let calls = events.create_calls();

    logger.set_win_log_name(LogTarget::Application);
    assert_eq!(events.create_calls(), calls);
}

#[test]
fn changing_source_name_rebinds_open_source() {
    let events = MemoryEventLog::new();
    let mut logger = system_logger(&events);

    logger.set_source_name("Billing");
    logger.warning("from billing");

    assert_eq!(events.entries()[0].source, "Billing");
    assert!(
        events
            .registered()
            .contains(&("Billing".to_string(), LogTarget::Application))
    );
}

#[test]
fn custom_log_registers_immediately_in_file_mode() {
    let events = MemoryEventLog::new();
    let mut logger = Logger::with_event_log(events.clone());

    logger.set_custom_win_log("MyAppLog");

    assert_eq!(
        logger.win_log_name(),
        &LogTarget::Custom("MyAppLog".to_string())
    );
    assert_eq!(
        events.registered(),
        vec![(
            "YourCPPApplication".to_string(),
            LogTarget::Custom("MyAppLog".to_string())
        )]
    );
    assert!(!events.is_open());
    assert!(!logger.has_system_log());
    assert_eq!(logger.log_mode(), LogMode::ToFile);
}

#[test]
fn custom_log_receives_entries_in_system_mode() {
    let events = MemoryEventLog::new();
    let mut logger = system_logger(&events);

    logger.set_custom_win_log("MyAppLog");
    logger.success_audit("audited");

    let entry = &events.entries()[0];
    assert_eq!(entry.target, LogTarget::Custom("MyAppLog".to_string()));
    assert_eq!(entry.target.log_name(), "MyAppLog");
}

#[test]
fn dropping_logger_closes_source() {
    let events = MemoryEventLog::new();
    {
        let _logger = system_logger(&events);
        assert!(events.is_open());
    }
    assert!(!events.is_open());
    assert_eq!(events.close_calls(), 1);
}

#[test]
fn noop_backend_accepts_everything() {
    let mut logger = Logger::with_event_log(NoopEventLog);
    logger.set_log_mode(LogMode::ToSystemLog);
    assert!(logger.has_system_log());
    logger.error("goes nowhere");
}

#[test]
fn severity_names() {
    assert_eq!(EventSeverity::Information.to_string(), "Information");
    assert_eq!(EventSeverity::FailureAudit.as_str(), "FailureAudit");
}
