//! Bridge from the submission controller to the terminal app
//!
//! The controller runs inside spawned tasks, so every presentation call
//! is forwarded as a [`UiEvent`] and applied to the app state on the
//! next tick.

use crate::auth::{
    FieldId, FormId, PresentationPort, Severity, SubmissionOutcome, SubmitError, ValidationError,
};
use tokio::sync::mpsc;

/// Everything the app needs to apply after a controller call
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    FieldError { field: FieldId, message: String },
    FieldSuccess(FieldId),
    Notification { message: String, severity: Severity },
    SuccessModal(String),
    SubmitLoading { form: FormId, loading: bool },
    Redirect,
    /// A spawned submission returned
    Finished {
        form: FormId,
        result: Result<SubmissionOutcome, SubmitError>,
    },
}

/// [`PresentationPort`] that queues events for the UI thread
#[derive(Debug, Clone)]
pub struct ChannelPresentation {
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl ChannelPresentation {
    pub fn new(tx: mpsc::UnboundedSender<UiEvent>) -> Self {
        Self { tx }
    }

    fn send(&self, event: UiEvent) {
        // Only fails once the app has shut down
        if self.tx.send(event).is_err() {
            tracing::debug!("ui channel closed, presentation event dropped");
        }
    }
}

impl PresentationPort for ChannelPresentation {
    fn show_field_error(&self, field: FieldId, reason: &ValidationError) {
        self.send(UiEvent::FieldError {
            field,
            message: reason.to_string(),
        });
    }

    fn show_field_success(&self, field: FieldId) {
        self.send(UiEvent::FieldSuccess(field));
    }

    fn show_notification(&self, message: &str, severity: Severity) {
        self.send(UiEvent::Notification {
            message: message.to_string(),
            severity,
        });
    }

    fn show_success_modal(&self, message: &str) {
        self.send(UiEvent::SuccessModal(message.to_string()));
    }

    fn set_submit_loading(&self, form: &FormId, loading: bool) {
        self.send(UiEvent::SubmitLoading {
            form: form.clone(),
            loading,
        });
    }

    fn on_success_redirect(&self) {
        self.send(UiEvent::Redirect);
    }
}
