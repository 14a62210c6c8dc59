//! Presentation port: visual feedback requested by the controller
//!
//! The controller calls these synchronously after each transition. It
//! never renders anything itself, and behaves identically when no port
//! is attached.

use super::error::ValidationError;
use super::fields::{FieldId, FormId};

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// Capability set for UI feedback
#[cfg_attr(test, mockall::automock)]
pub trait PresentationPort: Send + Sync {
    /// Mark a field as rejected
    fn show_field_error(&self, field: FieldId, reason: &ValidationError);

    /// Mark a field as accepted
    fn show_field_success(&self, field: FieldId);

    /// Transient message, at most one visible at a time
    fn show_notification(&self, message: &str, severity: Severity);

    /// Modal shown after a successful submission
    fn show_success_modal(&self, message: &str);

    /// Toggle the busy indicator on a form's submit control
    fn set_submit_loading(&self, form: &FormId, loading: bool);

    /// Signal that the host should leave the auth screen
    fn on_success_redirect(&self);
}
