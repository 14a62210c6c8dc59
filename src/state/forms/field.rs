//! Form field value objects

use crate::auth::FieldId;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Text rendered masked
    Secret(String),
    Checkbox(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Validation feedback attached to a field by the presentation port
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Unchecked,
    Valid,
    Error(String),
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub label: String,
    pub value: FieldValue,
    pub status: FieldStatus,
}

impl FormField {
    /// Create a new text field
    pub fn text(id: FieldId, label: &str) -> Self {
        Self::with_value(id, label, FieldValue::Text(String::new()))
    }

    /// Create a new masked text field
    pub fn secret(id: FieldId, label: &str) -> Self {
        Self::with_value(id, label, FieldValue::Secret(String::new()))
    }

    /// Create a new checkbox field
    pub fn checkbox(id: FieldId, label: &str) -> Self {
        Self::with_value(id, label, FieldValue::Checkbox(false))
    }

    fn with_value(id: FieldId, label: &str, value: FieldValue) -> Self {
        Self {
            id,
            label: label.to_string(),
            value,
            status: FieldStatus::Unchecked,
        }
    }

    /// Get the text value (returns empty string for checkboxes)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => s,
            FieldValue::Checkbox(_) => "",
        }
    }

    /// Get the checkbox value (returns false for text fields)
    pub fn is_checked(&self) -> bool {
        matches!(self.value, FieldValue::Checkbox(true))
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self.value, FieldValue::Checkbox(_))
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => s.push(c),
            FieldValue::Checkbox(_) => {}
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) | FieldValue::Secret(s) = &mut self.value {
            s.pop();
        }
    }

    /// Flip a checkbox
    pub fn toggle(&mut self) {
        if let FieldValue::Checkbox(checked) = &mut self.value {
            *checked = !*checked;
        }
    }

    /// Clear the field value and its feedback
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => s.clear(),
            FieldValue::Checkbox(checked) => *checked = false,
        }
        self.status = FieldStatus::Unchecked;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = FieldStatus::Error(message.into());
    }

    pub fn set_valid(&mut self) {
        self.status = FieldStatus::Valid;
    }

    pub fn clear_status(&mut self) {
        self.status = FieldStatus::Unchecked;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Secret(s) => "•".repeat(s.chars().count()),
            FieldValue::Checkbox(true) => "[x]".to_string(),
            FieldValue::Checkbox(false) => "[ ]".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_editing() {
        let mut field = FormField::text(FieldId::LoginEmail, "Email");
        for c in "ab".chars() {
            field.push_char(c);
        }
        assert_eq!(field.as_text(), "ab");
        field.pop_char();
        assert_eq!(field.as_text(), "a");
        assert_eq!(field.display_value(), "a");
    }

    #[test]
    fn test_secret_is_masked_per_character() {
        let mut field = FormField::secret(FieldId::LoginPassword, "Password");
        for c in "pä ss".chars() {
            field.push_char(c);
        }
        assert_eq!(field.as_text(), "pä ss");
        assert_eq!(field.display_value(), "•••••");
    }

    #[test]
    fn test_checkbox_ignores_text_input() {
        let mut field = FormField::checkbox(FieldId::AcceptTerms, "Terms");
        field.push_char('x');
        field.pop_char();
        assert!(!field.is_checked());
        assert_eq!(field.as_text(), "");

        field.toggle();
        assert!(field.is_checked());
        assert_eq!(field.display_value(), "[x]");
    }

    #[test]
    fn test_clear_resets_value_and_status() {
        let mut field = FormField::text(FieldId::RegisterName, "Name");
        field.push_char('A');
        field.set_error("Please fill in all fields");
        field.clear();
        assert_eq!(field.as_text(), "");
        assert_eq!(field.status, FieldStatus::Unchecked);
    }

    #[test]
    fn test_status_transitions() {
        let mut field = FormField::text(FieldId::RegisterEmail, "Email");
        field.set_valid();
        assert_eq!(field.status, FieldStatus::Valid);
        field.set_error("bad");
        assert_eq!(field.status, FieldStatus::Error("bad".to_string()));
        field.clear_status();
        assert_eq!(field.status, FieldStatus::Unchecked);
    }
}
