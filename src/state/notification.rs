//! Transient notification toast

use crate::auth::Severity;
use std::time::{Duration, Instant};

/// How long a notification stays on screen
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(4000);

/// A single toast; showing a new one replaces the previous
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub shown_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity, now: Instant) -> Self {
        Self {
            message: message.into(),
            severity,
            shown_at: now,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= NOTIFICATION_TTL
    }

    pub fn icon(&self) -> &'static str {
        match self.severity {
            Severity::Info => "ℹ",
            Severity::Success => "✓",
            Severity::Error => "✗",
        }
    }
}
