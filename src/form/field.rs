//! Contact form field names and per-field state

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldName {
    /// All fields in form order
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Subject,
        FieldName::Message,
    ];

    /// Lowercase identifier, matching the input element id
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Subject => "subject",
            FieldName::Message => "message",
        }
    }

    /// Capitalized label used in required-field messages
    pub fn label(self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Email => "Email",
            FieldName::Subject => "Subject",
            FieldName::Message => "Message",
        }
    }

    /// Id of the inline error text element paired with this field
    pub fn error_element_id(self) -> String {
        format!("{}-error", self.as_str())
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation state of a single field.
///
/// Recomputed from the raw value on every input, blur, and submit; never
/// carried across a value change.
#[derive(Debug, Clone)]
pub struct FieldState {
    pub name: FieldName,
    pub raw_value: String,
    pub is_valid: bool,
    pub error: Option<String>,
}

impl FieldState {
    /// Create an empty field. Empty input fails the required rule, but no
    /// error is surfaced until the field is first validated.
    pub fn empty(name: FieldName) -> Self {
        Self {
            name,
            raw_value: String::new(),
            is_valid: false,
            error: None,
        }
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.raw_value = value.into();
        // Stale verdicts must not survive a value change
        self.is_valid = false;
        self.error = None;
    }

    pub fn clear(&mut self) {
        self.set_value(String::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_and_ids() {
        let ids: Vec<&str> = FieldName::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(ids, vec!["name", "email", "subject", "message"]);
    }

    #[test]
    fn test_labels_are_capitalized() {
        assert_eq!(FieldName::Name.label(), "Name");
        assert_eq!(FieldName::Message.label(), "Message");
    }

    #[test]
    fn test_error_element_id() {
        assert_eq!(FieldName::Email.error_element_id(), "email-error");
    }

    #[test]
    fn test_set_value_resets_verdict() {
        let mut field = FieldState::empty(FieldName::Name);
        field.is_valid = true;
        field.error = Some("stale".to_string());
        field.set_value("Ann");
        assert!(!field.is_valid);
        assert!(field.error.is_none());
    }

    #[test]
    fn test_clear_empties_value() {
        let mut field = FieldState::empty(FieldName::Subject);
        field.set_value("Hi");
        field.clear();
        assert_eq!(field.raw_value, "");
    }
}
