//! System log sink
//!
//! Forwards messages to the local syslog daemon over the platform's unix
//! socket, mapping each [`LogLevel`] to a syslog severity. Connecting can
//! fail (no daemon, no socket); per-message write failures are the
//! platform's concern and are not surfaced, matching the sink contract of
//! an accept operation with no declared errors.

use parking_lot::Mutex;
use std::fmt;
use syslog::{Facility, Formatter3164};

use super::error::{Result, SinkError};
use crate::core::{format_tags, Logger, LogLevel, Message, Tag};

/// Severity class a level maps to when handed to the system logger.
///
/// Warnings are promoted to the error class and fatal messages to the
/// critical class, so they survive typical daemon-side severity filters.
fn severity(level: LogLevel) -> syslog::Severity {
    match level {
        LogLevel::Debug => syslog::Severity::LOG_DEBUG,
        LogLevel::Info => syslog::Severity::LOG_INFO,
        LogLevel::Warning | LogLevel::Error => syslog::Severity::LOG_ERR,
        LogLevel::Fatal => syslog::Severity::LOG_CRIT,
    }
}

/// A logger that forwards every message to the local system log, tagged
/// with `process` as the originating process name.
pub fn system_log<T: Tag + fmt::Display>(
    process: impl Into<String>,
) -> Result<Logger<Message<T>>> {
    let formatter = Formatter3164 {
        facility: Facility::LOG_USER,
        hostname: None,
        process: process.into(),
        pid: std::process::id(),
    };

    let writer = syslog::unix(formatter).map_err(|e| SinkError::SystemLog(e.to_string()))?;
    let writer = Mutex::new(writer);

    Ok(Logger::from_fn(move |message: Message<T>| {
        let text = if message.tags.is_empty() {
            message.value
        } else {
            format!("{} {}", message.value, format_tags(&message.tags))
        };

        let mut writer = writer.lock();
        // Write failures stay with the platform facility.
        let _ = match severity(message.level) {
            syslog::Severity::LOG_DEBUG => writer.debug(text),
            syslog::Severity::LOG_INFO => writer.info(text),
            syslog::Severity::LOG_CRIT => writer.crit(text),
            _ => writer.err(text),
        };
    }))
}
