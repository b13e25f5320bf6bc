//! In-app activity log. Builder events (blocks added, files imported,
//! previews refreshed, publishes) are listed in the log panel and mirrored
//! to `tracing`.

use dioxus::prelude::*;

/// Oldest entries are dropped beyond this many.
const MAX_ENTRIES: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            LogLevel::Info => "activity-log-entry info",
            LogLevel::Success => "activity-log-entry success",
            LogLevel::Warning => "activity-log-entry warning",
            LogLevel::Error => "activity-log-entry error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
}

impl ActivityLog {
    pub fn push(&mut self, level: LogLevel, message: &str) {
        if self.entries.len() == MAX_ENTRIES {
            self.entries.remove(0);
        }
        self.entries.push(LogEntry {
            timestamp: current_time(),
            level,
            message: message.to_string(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| e.level == LogLevel::Error)
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    match level {
        LogLevel::Warning | LogLevel::Error => tracing::warn!(?level, "{message}"),
        LogLevel::Info | LogLevel::Success => tracing::info!(?level, "{message}"),
    }
    log.write().push(level, message);
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    format!(
        "{:02}:{:02}:{:02}",
        date.get_hours(),
        date.get_minutes(),
        date.get_seconds()
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    "00:00:00".to_string()
}
