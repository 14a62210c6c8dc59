//! Values exchanged with an authentication backend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Email/password pair for sign-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// New account details for registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// An authenticated session returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    /// Email address or provider account the session belongs to
    pub subject: String,
    /// Social provider used, if any
    pub provider: Option<String>,
    pub issued_at: DateTime<Utc>,
}

impl Session {
    /// Issue a fresh session for `subject`
    pub fn issue(subject: impl Into<String>, provider: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject: subject.into(),
            provider,
            issued_at: Utc::now(),
        }
    }

    /// Shortened id for display
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}

/// Backend rejection carrying a human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn timed_out() -> Self {
        Self::new("Request timed out")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_generates_distinct_ids() {
        let a = Session::issue("a@b.c", None);
        let b = Session::issue("a@b.c", None);
        assert_ne!(a.id, b.id);
        assert_eq!(a.subject, "a@b.c");
        assert!(a.provider.is_none());
    }

    #[test]
    fn test_short_id_is_eight_hex_chars() {
        let session = Session::issue("github", Some("github".to_string()));
        let short = session.short_id();
        assert_eq!(short.len(), 8);
        assert!(short.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_auth_error_displays_message() {
        assert_eq!(AuthError::new("Invalid credentials").to_string(), "Invalid credentials");
        assert_eq!(AuthError::timed_out().to_string(), "Request timed out");
    }

    #[test]
    fn test_session_serialization() {
        let session = Session::issue("user@example.com", None);
        let json = serde_json::to_string(&session).unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, session);
    }
}
