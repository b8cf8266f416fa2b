//! Stateless per-field validation rules
//!
//! Pure rule evaluation only; callers apply the presentation effects
//! (error border, inline message) through the document port.

use super::field::FieldName;
use regex::Regex;
use std::sync::LazyLock;

/// Minimum trimmed length for the message field, in UTF-16 code units
const MESSAGE_MIN_LEN: usize = 10;

/// `local@domain.tld` with no whitespace or extra `@` in any part
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Outcome of evaluating one field's rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    fn ok() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
        }
    }
}

/// Evaluate a field's rules in precedence order; the first failing rule wins.
pub fn validate(field: FieldName, value: &str) -> ValidationResult {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return ValidationResult::fail(format!("{} is required", field.label()));
    }

    match field {
        FieldName::Email if !EMAIL_PATTERN.is_match(value) => {
            ValidationResult::fail("Please enter a valid email address")
        }
        FieldName::Message if trimmed.encode_utf16().count() < MESSAGE_MIN_LEN => {
            ValidationResult::fail("Message must be at least 10 characters")
        }
        _ => ValidationResult::ok(),
    }
}
