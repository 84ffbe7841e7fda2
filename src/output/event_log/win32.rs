// Win32 event log backend.
//
// Application and System sources resolve through RegisterEventSourceW directly. A
// custom log exists once its key is present under the EventLog service key, so the
// source is registered there first.

#![allow(unsafe_code)]

use super::{EventLog, EventSeverity};
use crate::config::LogTarget;
use crate::internal;
use windows::Win32::Foundation::HANDLE;
use windows::Win32::System::EventLog::{
    DeregisterEventSource, EVENTLOG_AUDIT_FAILURE, EVENTLOG_AUDIT_SUCCESS, EVENTLOG_ERROR_TYPE,
    EVENTLOG_INFORMATION_TYPE, EVENTLOG_WARNING_TYPE, REPORT_EVENT_TYPE, RegisterEventSourceW,
    ReportEventW,
};
use windows::Win32::System::Registry::{HKEY, HKEY_LOCAL_MACHINE, RegCloseKey, RegCreateKeyW};
use windows::core::{HSTRING, PCWSTR};

const EVENTLOG_KEY: &str = r"SYSTEM\CurrentControlSet\Services\EventLog";

const fn entry_type(severity: EventSeverity) -> REPORT_EVENT_TYPE {
    match severity {
        EventSeverity::Information => EVENTLOG_INFORMATION_TYPE,
        EventSeverity::Warning => EVENTLOG_WARNING_TYPE,
        EventSeverity::Error => EVENTLOG_ERROR_TYPE,
        EventSeverity::SuccessAudit => EVENTLOG_AUDIT_SUCCESS,
        EventSeverity::FailureAudit => EVENTLOG_AUDIT_FAILURE,
    }
}

/// Creates `EventLog\<log>\<source>` if missing. Needs administrative rights the first
/// time; afterwards the key already exists and creation is a no-op open.
fn register_custom_source(log: &str, source: &str) -> Result<(), crate::Error> {
    let subkey = HSTRING::from(format!(r"{EVENTLOG_KEY}\{log}\{source}"));
    let mut key = HKEY::default();
    // SAFETY: subkey is a valid NUL-terminated wide string and key is a valid out pointer.
    unsafe { RegCreateKeyW(HKEY_LOCAL_MACHINE, &subkey, &raw mut key) }
        .ok()
        .map_err(|e| crate::Error::EventLog(format!("cannot register {source} on {log}: {e}")))?;
    // SAFETY: key was just opened by RegCreateKeyW.
    let _ = unsafe { RegCloseKey(key) };
    Ok(())
}

/// Event log backed by a registered Win32 event source.
#[derive(Debug, Default)]
pub struct WindowsEventLog {
    handle: Option<HANDLE>,
}

// SAFETY: an event source handle is not tied to the thread that registered it.
unsafe impl Send for WindowsEventLog {}

impl WindowsEventLog {
    /// No source registered until `create_source`.
    #[must_use]
    pub const fn new() -> Self {
        Self { handle: None }
    }
}

impl EventLog for WindowsEventLog {
    fn create_source(&mut self, source: &str, target: &LogTarget) -> Result<(), crate::Error> {
        self.close();
        if let LogTarget::Custom(log) = target {
            register_custom_source(log, source)?;
        }
        let name = HSTRING::from(source);
        // SAFETY: a null server name selects the local machine; name is a valid wide string.
        let handle = unsafe { RegisterEventSourceW(PCWSTR::null(), &name) }
            .map_err(|e| crate::Error::EventLog(format!("cannot open source {source}: {e}")))?;
        internal::debug("EVENTLOG", &format!("Opened source {source} on {target}"));
        self.handle = Some(handle);
        Ok(())
    }

    fn write_entry(&mut self, severity: EventSeverity, text: &str) -> Result<(), crate::Error> {
        let Some(handle) = self.handle else {
            return Err(crate::Error::EventLog("no event source open".to_string()));
        };
        let message = HSTRING::from(text);
        let strings = [PCWSTR(message.as_ptr())];
        // SAFETY: handle came from RegisterEventSourceW and message outlives the call.
        unsafe {
            ReportEventW(
                handle,
                entry_type(severity),
                0,
                0,
                None,
                0,
                Some(&strings),
                None,
            )
        }
        .map_err(|e| crate::Error::EventLog(format!("ReportEventW failed: {e}")))
    }

    fn close(&mut self) {
        if let Some(handle) = self.handle.take() {
            // SAFETY: handle came from RegisterEventSourceW and is released exactly once.
            let _ = unsafe { DeregisterEventSource(handle) };
        }
    }
}

impl Drop for WindowsEventLog {
    fn drop(&mut self) {
        self.close();
    }
}
