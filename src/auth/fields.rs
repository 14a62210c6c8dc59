//! Form and field identifiers plus the raw field snapshots submitted by the UI

use std::fmt;

/// Identifies one form instance, the unit of state-machine isolation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormId {
    Login,
    Register,
    /// One social-provider button, keyed by provider name
    Social(String),
}

impl FormId {
    pub fn social(provider: impl Into<String>) -> Self {
        Self::Social(provider.into())
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => write!(f, "login"),
            Self::Register => write!(f, "register"),
            Self::Social(provider) => write!(f, "social:{provider}"),
        }
    }
}

/// Identifies an input on one of the forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    LoginEmail,
    LoginPassword,
    RegisterName,
    RegisterEmail,
    RegisterPassword,
    ConfirmPassword,
    AcceptTerms,
}

impl FieldId {
    pub fn label(&self) -> &'static str {
        match self {
            Self::LoginEmail | Self::RegisterEmail => "Email",
            Self::LoginPassword | Self::RegisterPassword => "Password",
            Self::RegisterName => "Name",
            Self::ConfirmPassword => "Confirm Password",
            Self::AcceptTerms => "Terms",
        }
    }

    /// The form this field belongs to
    pub fn form(&self) -> FormId {
        match self {
            Self::LoginEmail | Self::LoginPassword => FormId::Login,
            _ => FormId::Register,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of the login form at submit time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

/// Snapshot of the register form at submit time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_belongs_to_form() {
        assert_eq!(FieldId::LoginEmail.form(), FormId::Login);
        assert_eq!(FieldId::LoginPassword.form(), FormId::Login);
        assert_eq!(FieldId::ConfirmPassword.form(), FormId::Register);
        assert_eq!(FieldId::AcceptTerms.form(), FormId::Register);
    }

    #[test]
    fn test_social_forms_are_keyed_by_provider() {
        assert_eq!(FormId::social("github"), FormId::Social("github".into()));
        assert_ne!(FormId::social("github"), FormId::social("google"));
        assert_eq!(FormId::social("google").to_string(), "social:google");
    }
}
