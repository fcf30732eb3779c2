//! Notification model
//!
//! Short-lived feedback shown in the status bar after a command finishes.

use std::time::{Duration, Instant};

use super::entry_model::PatchReport;

/// How long a notification stays visible
const LIFETIME: Duration = Duration::from_secs(5);

/// Kind of notification (determines color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Command finished and the model was updated (green)
    Success,
    /// Informational message (cyan)
    Info,
    /// Finished, but not every path could be matched (yellow)
    Warning,
}

/// A notification to display to the user
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    /// Summary of an incremental patch, e.g. `commit: 2 paths, revision 101`
    pub fn for_patch(command: &str, report: &PatchReport, revision: Option<i64>) -> Self {
        let mut message = match report.applied {
            1 => format!("{command}: 1 path"),
            n => format!("{command}: {n} paths"),
        };
        if let Some(revision) = revision {
            message.push_str(&format!(", revision {revision}"));
        }
        if report.missed.is_empty() {
            Self::success(message)
        } else {
            message.push_str(&format!(" ({} not in listing)", report.missed.len()));
            Self::warning(message)
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= LIFETIME
    }
}
