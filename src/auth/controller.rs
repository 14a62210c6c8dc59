//! Submission state machine shared by the login, register and social forms
//!
//! Each [`FormId`] owns one [`SubmissionState`]:
//!
//! ```text
//! Idle --submit(valid)--> Pending --ok--> Succeeded
//!                            |
//!                            +---err--> Failed { message }
//! ```
//!
//! A form that is `Pending` rejects further submits with
//! [`SubmitError::AlreadyInProgress`] without touching the gateway, so at
//! most one submission per form is ever in flight. The state lock is never
//! held across an `.await` or while calling the presentation port.

use super::error::{SubmitError, ValidationError, ValidationResult};
use super::fields::{FieldId, FormId, LoginFields, RegisterFields};
use super::presentation::{PresentationPort, Severity};
use super::validation::{
    validate_acceptance, validate_confirmation, validate_email, validate_password,
    validate_required_text, PasswordPolicy,
};
use crate::gateway::{AuthError, AuthGateway, Credentials, Profile, Session};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Lifecycle of a single form instance
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed { message: String },
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// When a `Failed` form returns to `Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailedResetPolicy {
    /// Only the next submit attempt clears the failure
    #[default]
    OnNextSubmit,
    /// Any edit to the form clears the failure
    OnInput,
}

/// Terminal result of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded { message: String, session: Session },
    Failed { message: String },
}

/// Rules and policies applied by the controller
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerSettings {
    pub password_policy: PasswordPolicy,
    pub require_terms_acceptance: bool,
    pub failed_reset: FailedResetPolicy,
    /// Upper bound on a single gateway call; `None` waits indefinitely
    pub gateway_timeout: Option<Duration>,
    /// Product name used in success messages
    pub app_name: String,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            password_policy: PasswordPolicy::lenient(),
            require_terms_acceptance: true,
            failed_reset: FailedResetPolicy::OnNextSubmit,
            gateway_timeout: None,
            app_name: "AlgoRhythm".to_string(),
        }
    }
}

pub struct SubmissionController {
    gateway: Arc<dyn AuthGateway>,
    presentation: Option<Arc<dyn PresentationPort>>,
    settings: ControllerSettings,
    states: Mutex<HashMap<FormId, SubmissionState>>,
}

impl SubmissionController {
    pub fn new(gateway: Arc<dyn AuthGateway>, settings: ControllerSettings) -> Self {
        Self {
            gateway,
            presentation: None,
            settings,
            states: Mutex::new(HashMap::new()),
        }
    }

    /// Attach a presentation port
    pub fn with_presentation(mut self, presentation: Arc<dyn PresentationPort>) -> Self {
        self.presentation = Some(presentation);
        self
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    /// Current state of a form; forms never submitted are `Idle`
    pub fn state(&self, form: &FormId) -> SubmissionState {
        self.states().get(form).cloned().unwrap_or_default()
    }

    /// Notify the controller that the user edited a form.
    /// Returns true if a `Failed` state was cleared.
    pub fn field_edited(&self, form: &FormId) -> bool {
        if self.settings.failed_reset != FailedResetPolicy::OnInput {
            return false;
        }
        let mut states = self.states();
        match states.get(form) {
            Some(SubmissionState::Failed { .. }) => {
                states.insert(form.clone(), SubmissionState::Idle);
                tracing::debug!(%form, "failure cleared by input");
                true
            }
            _ => false,
        }
    }

    pub async fn submit_login(
        &self,
        fields: LoginFields,
    ) -> Result<SubmissionOutcome, SubmitError> {
        let form = FormId::Login;
        self.prepare(&form)?;

        self.check(FieldId::LoginEmail, validate_email(&fields.email))?;
        let password_present = if fields.password.is_empty() {
            Err(ValidationError::Empty)
        } else {
            Ok(())
        };
        self.check(FieldId::LoginPassword, password_present)?;

        self.begin(&form)?;
        let credentials = Credentials {
            email: fields.email.trim().to_string(),
            password: fields.password,
        };
        let result = self
            .call_gateway(self.gateway.authenticate(credentials))
            .await;

        let welcome = format!("Welcome back to {}!", self.settings.app_name);
        Ok(self.finish(&form, result, welcome, None))
    }

    pub async fn submit_register(
        &self,
        fields: RegisterFields,
    ) -> Result<SubmissionOutcome, SubmitError> {
        let form = FormId::Register;
        self.prepare(&form)?;

        self.check(FieldId::RegisterName, validate_required_text(&fields.name))?;
        self.check(FieldId::RegisterEmail, validate_email(&fields.email))?;
        self.check(
            FieldId::RegisterPassword,
            validate_password(&fields.password, &self.settings.password_policy),
        )?;
        self.check(
            FieldId::ConfirmPassword,
            validate_confirmation(&fields.password, &fields.confirm_password),
        )?;
        if self.settings.require_terms_acceptance {
            self.check(FieldId::AcceptTerms, validate_acceptance(fields.accept_terms))?;
        }

        self.begin(&form)?;
        let profile = Profile {
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
            password: fields.password,
        };
        let result = self.call_gateway(self.gateway.register(profile)).await;

        let welcome = format!("Welcome to {}!", self.settings.app_name);
        Ok(self.finish(&form, result, welcome, None))
    }

    pub async fn submit_social(&self, provider: &str) -> Result<SubmissionOutcome, SubmitError> {
        let form = FormId::social(provider);
        self.prepare(&form)?;
        self.begin(&form)?;

        if let Some(port) = &self.presentation {
            port.show_notification(&format!("Connecting to {provider}..."), Severity::Info);
        }

        let result = self
            .call_gateway(self.gateway.authenticate_social(provider.to_string()))
            .await;

        Ok(self.finish(
            &form,
            result,
            format!("Successfully connected with {provider}!"),
            Some(format!("Failed to connect with {provider}")),
        ))
    }

    /// Handle the "forgot password" action from the login form
    pub fn request_password_reset(&self, email: &str) -> ValidationResult {
        if let Err(reason) = validate_required_text(email) {
            if let Some(port) = &self.presentation {
                port.show_field_error(FieldId::LoginEmail, &reason);
                port.show_notification("Please enter your email address first", Severity::Error);
            }
            return Err(reason);
        }

        tracing::info!("password reset requested");
        if let Some(port) = &self.presentation {
            port.show_notification("Password reset link sent to your email!", Severity::Success);
        }
        Ok(())
    }

    fn states(&self) -> MutexGuard<'_, HashMap<FormId, SubmissionState>> {
        self.states.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_state(&self, form: &FormId, state: SubmissionState) {
        tracing::debug!(%form, ?state, "submission state changed");
        self.states().insert(form.clone(), state);
    }

    /// Reject re-entry and clear a previous terminal state
    fn prepare(&self, form: &FormId) -> Result<(), SubmitError> {
        let mut states = self.states();
        match states.get(form) {
            Some(SubmissionState::Pending) => {
                tracing::debug!(%form, "duplicate submit ignored");
                Err(SubmitError::AlreadyInProgress)
            }
            Some(SubmissionState::Failed { .. } | SubmissionState::Succeeded) => {
                states.insert(form.clone(), SubmissionState::Idle);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Report one validation step to the presentation port
    fn check(&self, field: FieldId, result: ValidationResult) -> Result<(), SubmitError> {
        match result {
            Ok(()) => {
                if let Some(port) = &self.presentation {
                    port.show_field_success(field);
                }
                Ok(())
            }
            Err(reason) => {
                tracing::debug!(%field, %reason, "field rejected");
                if let Some(port) = &self.presentation {
                    port.show_field_error(field, &reason);
                    port.show_notification(&reason.to_string(), Severity::Error);
                }
                Err(SubmitError::Invalid { field, reason })
            }
        }
    }

    /// Atomically move a form to `Pending`
    fn begin(&self, form: &FormId) -> Result<(), SubmitError> {
        {
            let mut states = self.states();
            if states.get(form).is_some_and(SubmissionState::is_pending) {
                return Err(SubmitError::AlreadyInProgress);
            }
            states.insert(form.clone(), SubmissionState::Pending);
        }

        tracing::info!(%form, "submission accepted");
        if let Some(port) = &self.presentation {
            port.set_submit_loading(form, true);
        }
        Ok(())
    }

    async fn call_gateway<F>(&self, call: F) -> Result<Session, AuthError>
    where
        F: Future<Output = Result<Session, AuthError>>,
    {
        match self.settings.gateway_timeout {
            Some(limit) => tokio::time::timeout(limit, call).await.unwrap_or_else(|_| {
                tracing::warn!(?limit, "gateway call timed out");
                Err(AuthError::timed_out())
            }),
            None => call.await,
        }
    }

    /// Record the terminal state and report it
    fn finish(
        &self,
        form: &FormId,
        result: Result<Session, AuthError>,
        success_message: String,
        failure_notice: Option<String>,
    ) -> SubmissionOutcome {
        match result {
            Ok(session) => {
                self.set_state(form, SubmissionState::Succeeded);
                tracing::info!(%form, session = %session.id, "submission succeeded");
                if let Some(port) = &self.presentation {
                    port.set_submit_loading(form, false);
                    port.show_success_modal(&success_message);
                    port.on_success_redirect();
                }
                SubmissionOutcome::Succeeded {
                    message: success_message,
                    session,
                }
            }
            Err(err) => {
                self.set_state(
                    form,
                    SubmissionState::Failed {
                        message: err.message.clone(),
                    },
                );
                tracing::warn!(%form, error = %err, "submission failed");
                if let Some(port) = &self.presentation {
                    port.set_submit_loading(form, false);
                    let notice = failure_notice.as_deref().unwrap_or(&err.message);
                    port.show_notification(notice, Severity::Error);
                }
                SubmissionOutcome::Failed {
                    message: err.message,
                }
            }
        }
    }
}
