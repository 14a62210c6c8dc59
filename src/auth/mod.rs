//! Credential-form validation and submission-state management
//!
//! This module is independent of the terminal UI: it talks to an
//! [`AuthGateway`](crate::gateway::AuthGateway) for outcomes and to an
//! optional [`PresentationPort`] for feedback.

mod controller;
mod error;
mod fields;
mod presentation;
mod validation;

pub use controller::{
    ControllerSettings, FailedResetPolicy, SubmissionController, SubmissionOutcome,
    SubmissionState,
};
pub use error::{SubmitError, ValidationError};
pub use fields::{FieldId, FormId, LoginFields, RegisterFields};
pub use presentation::{PresentationPort, Severity};
pub use validation::{
    score_password_strength, PasswordPolicy, PolicyPreset, StrengthLevel, MAX_STRENGTH,
};
