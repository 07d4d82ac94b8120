use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ContactField, ValidationError};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Submit-time check. Only a truly empty value counts as missing here;
/// whitespace-only input is left to the blur check.
pub fn validate(submission: &ContactSubmission) -> Result<(), ValidationError> {
    let required = [
        (ContactField::Name, &submission.name),
        (ContactField::Email, &submission.email),
        (ContactField::Message, &submission.message),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
        return Err(ValidationError::MissingField(*field));
    }
    if !is_valid_email(&submission.email) {
        return Err(ValidationError::BadEmail);
    }
    Ok(())
}

/// Blur-time check for a single form control.
pub fn flags_invalid_on_blur(value: &str) -> bool {
    value.trim().is_empty()
}
