//! Form state management and form structs

use super::field::FormField;
use crate::auth::{FieldId, LoginFields, RegisterFields};

/// Third-party sign-in providers offered on both forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    GitHub,
    Facebook,
}

impl SocialProvider {
    /// Provider key passed to the gateway
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::GitHub => "github",
            Self::Facebook => "facebook",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::GitHub => "GitHub",
            Self::Facebook => "Facebook",
        }
    }
}

/// What a button on the buttons row does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Submit,
    ForgotPassword,
    Social(SocialProvider),
}

/// Buttons on the login form, in display order
pub const LOGIN_ACTIONS: &[FormAction] = &[
    FormAction::Submit,
    FormAction::ForgotPassword,
    FormAction::Social(SocialProvider::Google),
    FormAction::Social(SocialProvider::GitHub),
    FormAction::Social(SocialProvider::Facebook),
];

/// Buttons on the register form, in display order
pub const REGISTER_ACTIONS: &[FormAction] = &[
    FormAction::Submit,
    FormAction::Social(SocialProvider::Google),
    FormAction::Social(SocialProvider::GitHub),
    FormAction::Social(SocialProvider::Facebook),
];

/// Trait for common form operations.
///
/// Rows are the form's fields followed by one buttons row.
pub trait Form {
    fn fields(&self) -> Vec<&FormField>;
    fn fields_mut(&mut self) -> Vec<&mut FormField>;
    fn actions(&self) -> &'static [FormAction];
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn selected_button(&self) -> usize;
    fn set_selected_button(&mut self, index: usize);

    fn field_count(&self) -> usize {
        self.fields().len() + 1
    }

    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }

    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }

    /// Returns true if the buttons row is currently active
    fn is_buttons_row_active(&self) -> bool {
        self.active_field() == self.field_count() - 1
    }

    /// Move to the next button (wraps around)
    fn next_button(&mut self) {
        let count = self.actions().len();
        self.set_selected_button((self.selected_button() + 1) % count);
    }

    /// Move to the previous button (wraps around)
    fn prev_button(&mut self) {
        let count = self.actions().len();
        let current = self.selected_button();
        if current == 0 {
            self.set_selected_button(count - 1);
        } else {
            self.set_selected_button(current - 1);
        }
    }

    fn selected_action(&self) -> FormAction {
        self.actions()
            .get(self.selected_button())
            .copied()
            .unwrap_or(FormAction::Submit)
    }

    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field();
        self.fields_mut().into_iter().nth(index)
    }

    fn field_mut(&mut self, id: FieldId) -> Option<&mut FormField> {
        self.fields_mut().into_iter().find(|f| f.id == id)
    }

    /// Clear every value, every status and the focus
    fn reset(&mut self) {
        for field in self.fields_mut() {
            field.clear();
        }
        self.set_active_field(0);
        self.set_selected_button(0);
    }
}

// Login Form
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: FormField,
    pub password: FormField,
    pub active_field_index: usize,
    pub selected_button: usize,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text(FieldId::LoginEmail, "Email"),
            password: FormField::secret(FieldId::LoginPassword, "Password"),
            active_field_index: 0,
            selected_button: 0,
        }
    }

    /// Snapshot the values for submission
    pub fn to_fields(&self) -> LoginFields {
        LoginFields {
            email: self.email.as_text().to_string(),
            password: self.password.as_text().to_string(),
        }
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    fn fields(&self) -> Vec<&FormField> {
        vec![&self.email, &self.password]
    }
    fn fields_mut(&mut self) -> Vec<&mut FormField> {
        vec![&mut self.email, &mut self.password]
    }
    fn actions(&self) -> &'static [FormAction] {
        LOGIN_ACTIONS
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }
    fn selected_button(&self) -> usize {
        self.selected_button
    }
    fn set_selected_button(&mut self, index: usize) {
        self.selected_button = index.min(LOGIN_ACTIONS.len() - 1);
    }
}

// Register Form
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub name: FormField,
    pub email: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    pub accept_terms: FormField,
    /// Whether the terms checkbox is part of the form
    pub show_terms: bool,
    pub active_field_index: usize,
    pub selected_button: usize,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::with_terms(true)
    }

    /// Form with the terms checkbox present or left out
    pub fn with_terms(show_terms: bool) -> Self {
        Self {
            name: FormField::text(FieldId::RegisterName, "Name"),
            email: FormField::text(FieldId::RegisterEmail, "Email"),
            password: FormField::secret(FieldId::RegisterPassword, "Password"),
            confirm_password: FormField::secret(FieldId::ConfirmPassword, "Confirm Password"),
            accept_terms: FormField::checkbox(FieldId::AcceptTerms, "I accept the terms"),
            show_terms,
            active_field_index: 0,
            selected_button: 0,
        }
    }

    /// Snapshot the values for submission
    pub fn to_fields(&self) -> RegisterFields {
        RegisterFields {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            password: self.password.as_text().to_string(),
            confirm_password: self.confirm_password.as_text().to_string(),
            accept_terms: self.accept_terms.is_checked(),
        }
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegisterForm {
    fn fields(&self) -> Vec<&FormField> {
        let mut fields = vec![
            &self.name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ];
        if self.show_terms {
            fields.push(&self.accept_terms);
        }
        fields
    }
    fn fields_mut(&mut self) -> Vec<&mut FormField> {
        let mut fields = vec![
            &mut self.name,
            &mut self.email,
            &mut self.password,
            &mut self.confirm_password,
        ];
        if self.show_terms {
            fields.push(&mut self.accept_terms);
        }
        fields
    }
    fn actions(&self) -> &'static [FormAction] {
        REGISTER_ACTIONS
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        let buttons_row = self.field_count() - 1;
        self.active_field_index = index.min(buttons_row);
    }
    fn selected_button(&self) -> usize {
        self.selected_button
    }
    fn set_selected_button(&mut self, index: usize) {
        self.selected_button = index.min(REGISTER_ACTIONS.len() - 1);
    }
}
