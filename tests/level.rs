//! Tests for verbosity levels, log modes, and the filter law.

use utility_logger::{LogMode, Verbosity};

#[test]
fn level_ordering() {
    assert!(Verbosity::None < Verbosity::Information);
    assert!(Verbosity::Information < Verbosity::Warning);
    assert!(Verbosity::Warning < Verbosity::Error);
    assert!(Verbosity::Error < Verbosity::SuccessAudit);
    assert!(Verbosity::SuccessAudit < Verbosity::FailureAudit);
    assert!(Verbosity::FailureAudit < Verbosity::All);
}

#[test]
fn level_display() {
    assert_eq!(Verbosity::None.to_string(), "none");
    assert_eq!(Verbosity::Information.to_string(), "information");
    assert_eq!(Verbosity::Warning.to_string(), "warning");
    assert_eq!(Verbosity::Error.to_string(), "error");
    assert_eq!(Verbosity::SuccessAudit.to_string(), "successaudit");
    assert_eq!(Verbosity::FailureAudit.to_string(), "failureaudit");
    assert_eq!(Verbosity::All.to_string(), "all");
}

#[test]
fn level_from_str() {
    assert_eq!("warning".parse::<Verbosity>().unwrap(), Verbosity::Warning);
    assert_eq!("failureaudit".parse::<Verbosity>().unwrap(), Verbosity::FailureAudit);
    assert_eq!("all".parse::<Verbosity>().unwrap(), Verbosity::All);
}

#[test]
fn level_from_str_is_case_sensitive() {
    assert!("Warning".parse::<Verbosity>().is_err());
    assert!("FailureAudit".parse::<Verbosity>().is_err());
    assert!("ALL".parse::<Verbosity>().is_err());
}

#[test]
fn mode_from_str_is_case_sensitive() {
    assert_eq!("to_system".parse::<LogMode>().unwrap(), LogMode::ToSystemLog);
    assert!("TO_SYSTEM".parse::<LogMode>().is_err());
    assert!("To_Log".parse::<LogMode>().is_err());
}

#[test]
fn level_from_str_rejects_numbers_and_unknowns() {
    assert!("3".parse::<Verbosity>().is_err());
    assert!("warn".parse::<Verbosity>().is_err());
    assert!("".parse::<Verbosity>().is_err());
}

#[test]
fn level_from_ordinal() {
    assert_eq!(Verbosity::try_from(0).unwrap(), Verbosity::None);
    assert_eq!(Verbosity::try_from(6).unwrap(), Verbosity::All);
    assert!(Verbosity::try_from(7).is_err());
    assert!(Verbosity::try_from(-1).is_err());
}

#[test]
fn level_default() {
    assert_eq!(Verbosity::default(), Verbosity::Information);
}

#[test]
fn none_never_passes() {
    for threshold in Verbosity::all() {
        assert!(!Verbosity::None.passes(threshold));
    }
}

#[test]
fn passes_up_to_and_including_threshold() {
    for threshold in Verbosity::all() {
        for level in Verbosity::all() {
            let expected = level != Verbosity::None && level <= threshold;
            assert_eq!(level.passes(threshold), expected, "{level} vs {threshold}");
        }
    }
}
