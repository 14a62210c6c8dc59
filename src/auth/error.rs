//! Error taxonomy for the authentication core

use super::fields::FieldId;
use thiserror::Error;

/// Why a single field failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    Empty,
    #[error("Please enter a valid email address")]
    MalformedEmail,
    #[error("Password must be at least {min_length} characters")]
    PasswordTooShort { min_length: usize },
    #[error("Password must mix upper-case, lower-case and numeric characters")]
    PasswordTooWeak,
    #[error("Passwords do not match")]
    Mismatch,
    #[error("Please accept the terms and conditions")]
    TermsNotAccepted,
}

/// Outcome of validating one field
pub type ValidationResult = Result<(), ValidationError>;

/// Reasons a submit call did not reach the gateway
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// A field was rejected before the gateway was contacted
    #[error("{field}: {reason}")]
    Invalid {
        field: FieldId,
        reason: ValidationError,
    },
    /// The same form already has a submission in flight
    #[error("a submission is already in progress")]
    AlreadyInProgress,
}
