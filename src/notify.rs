//! Notification sink — fire-and-forget user-visible acknowledgements.

use serde::Serialize;

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Default,
}

/// A user-visible acknowledgement (save succeeded, profile completed, …).
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            severity: Severity::Info,
        }
    }

    pub fn default_severity(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            severity: Severity::Default,
        }
    }
}

/// Notification collaborator. No return value is consumed by callers.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Production sink — surfaces notifications through the log.
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: Notification) {
        tracing::info!(
            title = %notification.title,
            body = %notification.body,
            severity = ?notification.severity,
            "Notification"
        );
    }
}
