//! Field validation rules and the advisory password strength score
//!
//! Every function here is pure. Empty input is rejected with
//! [`ValidationError::Empty`] before any format or length rule runs.
//! Email and name are trimmed first; passwords are taken verbatim.

use super::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};

/// Password rules injected into validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_upper: bool,
    pub require_lower: bool,
    pub require_digit: bool,
}

impl PasswordPolicy {
    /// Six characters, no character-class requirements
    pub const fn lenient() -> Self {
        Self {
            min_length: 6,
            require_upper: false,
            require_lower: false,
            require_digit: false,
        }
    }

    /// Eight characters with upper-case, lower-case and a digit
    pub const fn strict() -> Self {
        Self {
            min_length: 8,
            require_upper: true,
            require_lower: true,
            require_digit: true,
        }
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::lenient()
    }
}

/// Named policy presets selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyPreset {
    #[default]
    Lenient,
    Strict,
}

impl PolicyPreset {
    pub fn policy(self) -> PasswordPolicy {
        match self {
            Self::Lenient => PasswordPolicy::lenient(),
            Self::Strict => PasswordPolicy::strict(),
        }
    }
}

pub fn validate_email(raw: &str) -> ValidationResult {
    let email = raw.trim();
    if email.is_empty() {
        return Err(ValidationError::Empty);
    }

    let (local, domain) = email
        .split_once('@')
        .ok_or(ValidationError::MalformedEmail)?;

    if !is_address_part(local) || !is_address_part(domain) {
        return Err(ValidationError::MalformedEmail);
    }

    // Needs a dot with text on both sides somewhere in the domain
    let has_inner_dot = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());
    if !has_inner_dot {
        return Err(ValidationError::MalformedEmail);
    }

    Ok(())
}

fn is_address_part(part: &str) -> bool {
    !part.is_empty() && !part.chars().any(|c| c == '@' || c.is_whitespace())
}

pub fn validate_password(raw: &str, policy: &PasswordPolicy) -> ValidationResult {
    if raw.is_empty() {
        return Err(ValidationError::Empty);
    }

    if raw.chars().count() < policy.min_length {
        return Err(ValidationError::PasswordTooShort {
            min_length: policy.min_length,
        });
    }

    let missing_upper = policy.require_upper && !raw.chars().any(|c| c.is_ascii_uppercase());
    let missing_lower = policy.require_lower && !raw.chars().any(|c| c.is_ascii_lowercase());
    let missing_digit = policy.require_digit && !raw.chars().any(|c| c.is_ascii_digit());
    if missing_upper || missing_lower || missing_digit {
        return Err(ValidationError::PasswordTooWeak);
    }

    Ok(())
}

/// Confirmation must be present and byte-equal to the password
pub fn validate_confirmation(password: &str, confirm: &str) -> ValidationResult {
    if confirm.is_empty() {
        return Err(ValidationError::Empty);
    }
    if password != confirm {
        return Err(ValidationError::Mismatch);
    }
    Ok(())
}

pub fn validate_required_text(raw: &str) -> ValidationResult {
    if raw.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    Ok(())
}

pub fn validate_acceptance(flag: bool) -> ValidationResult {
    if flag {
        Ok(())
    } else {
        Err(ValidationError::TermsNotAccepted)
    }
}

/// Highest value [`score_password_strength`] can return
pub const MAX_STRENGTH: u8 = 5;

/// Score a password from 0 to 5. Never blocks submission.
pub fn score_password_strength(raw: &str) -> u8 {
    let checks = [
        raw.chars().count() >= 8,
        raw.chars().any(|c| c.is_ascii_lowercase()),
        raw.chars().any(|c| c.is_ascii_uppercase()),
        raw.chars().any(|c| c.is_ascii_digit()),
        raw.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    checks.iter().filter(|passed| **passed).count() as u8
}

/// Coarse bucket of the strength score used by the meter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Self::Weak,
            3 => Self::Fair,
            4 => Self::Good,
            _ => Self::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }
}
