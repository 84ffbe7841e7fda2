// syslog(3) backend for Unix hosts.
//
// The Windows notion of a named log maps onto syslog facilities: Application is
// LOG_USER, System is LOG_DAEMON, and custom logs share LOG_LOCAL0 with the log name
// prefixed to each entry. openlog(3) keeps the ident pointer, so idents are interned
// for the life of the process.

#![allow(unsafe_code)]

use super::{EventLog, EventSeverity};
use crate::config::LogTarget;
use crate::internal;
use std::collections::HashMap;
use std::ffi::{CStr, CString};
use std::sync::{Mutex, OnceLock, PoisonError};

/// `%s` with the message as an argument keeps `%` in messages from being interpreted.
const FORMAT: &CStr = c"%s";

fn intern_ident(source: &str) -> Result<&'static CStr, crate::Error> {
    static IDENTS: OnceLock<Mutex<HashMap<String, &'static CStr>>> = OnceLock::new();

    let mut idents = IDENTS
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(ident) = idents.get(source).copied() {
        return Ok(ident);
    }
    let owned = CString::new(source)
        .map_err(|_| crate::Error::EventLog(format!("source name contains NUL: {source:?}")))?;
    let ident: &'static CStr = Box::leak(owned.into_boxed_c_str());
    idents.insert(source.to_string(), ident);
    Ok(ident)
}

fn facility(target: &LogTarget) -> libc::c_int {
    match target {
        LogTarget::Application => libc::LOG_USER,
        LogTarget::System => libc::LOG_DAEMON,
        LogTarget::Custom(_) => libc::LOG_LOCAL0,
    }
}

const fn priority(severity: EventSeverity) -> libc::c_int {
    match severity {
        EventSeverity::Information => libc::LOG_INFO,
        EventSeverity::Warning | EventSeverity::FailureAudit => libc::LOG_WARNING,
        EventSeverity::Error => libc::LOG_ERR,
        EventSeverity::SuccessAudit => libc::LOG_NOTICE,
    }
}

#[derive(Debug)]
struct Binding {
    ident: &'static CStr,
    facility: libc::c_int,
    /// Custom log name, prepended so entries can be told apart within LOG_LOCAL0.
    prefix: Option<String>,
}

/// Event log backed by the process's syslog connection.
#[derive(Debug, Default)]
pub struct SyslogEventLog {
    binding: Option<Binding>,
}

impl SyslogEventLog {
    /// No source open until `create_source`.
    #[must_use]
    pub const fn new() -> Self {
        Self { binding: None }
    }

    fn open(binding: &Binding) {
        // SAFETY: the ident is a 'static interned C string, so the pointer openlog keeps
        // stays valid for the rest of the process.
        unsafe {
            libc::openlog(binding.ident.as_ptr(), libc::LOG_PID, binding.facility);
        }
    }
}

impl EventLog for SyslogEventLog {
    fn create_source(&mut self, source: &str, target: &LogTarget) -> Result<(), crate::Error> {
        let binding = Binding {
            ident: intern_ident(source)?,
            facility: facility(target),
            prefix: match target {
                LogTarget::Custom(name) => Some(name.clone()),
                LogTarget::Application | LogTarget::System => None,
            },
        };
        Self::open(&binding);
        internal::debug(
            "SYSLOG",
            &format!("Opened source {source} on {target} (facility {})", binding.facility),
        );
        self.binding = Some(binding);
        Ok(())
    }

    fn write_entry(&mut self, severity: EventSeverity, text: &str) -> Result<(), crate::Error> {
        let Some(binding) = &self.binding else {
            return Err(crate::Error::EventLog("no event source open".to_string()));
        };
        let line = match &binding.prefix {
            Some(log) => format!("[{log}] {text}"),
            None => text.to_string(),
        };
        let message = CString::new(line)
            .map_err(|_| crate::Error::EventLog("message contains NUL".to_string()))?;

        // Another logger in this process may have re-opened syslog under its own ident.
        Self::open(binding);
        // SAFETY: FORMAT and message are valid NUL-terminated strings and the format
        // consumes exactly one string argument.
        unsafe {
            libc::syslog(
                priority(severity) | binding.facility,
                FORMAT.as_ptr(),
                message.as_ptr(),
            );
        }
        Ok(())
    }

    fn close(&mut self) {
        if self.binding.take().is_some() {
            // SAFETY: closelog has no preconditions.
            unsafe {
                libc::closelog();
            }
        }
    }
}

impl Drop for SyslogEventLog {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_map_to_distinct_facilities() {
        assert_eq!(facility(&LogTarget::Application), libc::LOG_USER);
        assert_eq!(facility(&LogTarget::System), libc::LOG_DAEMON);
        assert_eq!(facility(&LogTarget::Custom("Ops".into())), libc::LOG_LOCAL0);
    }

    #[test]
    fn idents_are_interned() {
        let a = intern_ident("utility-logger-test").unwrap();
        let b = intern_ident("utility-logger-test").unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn nul_in_source_is_rejected() {
        let mut log = SyslogEventLog::new();
        assert!(log.create_source("bad\0name", &LogTarget::Application).is_err());
    }

    #[test]
    fn write_without_source_fails() {
        let mut log = SyslogEventLog::new();
        assert!(log.write_entry(EventSeverity::Information, "x").is_err());
    }

    #[test]
    fn severities_map_to_priorities() {
        assert_eq!(priority(EventSeverity::Information), libc::LOG_INFO);
        assert_eq!(priority(EventSeverity::Warning), libc::LOG_WARNING);
        assert_eq!(priority(EventSeverity::Error), libc::LOG_ERR);
        assert_eq!(priority(EventSeverity::SuccessAudit), libc::LOG_NOTICE);
        assert_eq!(priority(EventSeverity::FailureAudit), libc::LOG_WARNING);
    }
}
