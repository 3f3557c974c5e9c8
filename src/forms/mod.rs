//! Lead-generation forms and their validation.
//!
//! Each form is deserialized from the posted body as-is, then converted with
//! `TryFrom` into a typed payload. Conversion trims every value, rejects
//! submissions whose honeypot field is filled, and collects one message per
//! failing field so the page can show them inline.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod contact;
pub mod events;
pub mod youth_spotlight;

/// Name of the hidden field bots tend to fill in.
pub const HONEYPOT_FIELD: &str = "website";

/// Validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the first message of every field that failed derive validation.
    pub fn from_validation(result: Result<(), ValidationErrors>) -> Self {
        match result {
            Ok(()) => Self::new(),
            Err(errors) => errors.into(),
        }
    }

    /// Records `message` for `field` unless the field already has one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(())` when no field failed, otherwise [`FormError::Invalid`].
    pub fn into_result(self) -> Result<(), FormError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(FormError::Invalid(self))
        }
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let parts = self
            .0
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>();
        write!(f, "{}", parts.join("; "))
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(value: ValidationErrors) -> Self {
        let mut errors = Self::new();
        for (field, field_errors) in value.field_errors() {
            if let Some(error) = field_errors.first() {
                let message = match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid"),
                };
                errors.insert(field.to_string(), message);
            }
        }
        errors
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("submission rejected by the spam check")]
    Spam,
    #[error("form validation failed: {0}")]
    Invalid(FieldErrors),
    #[error("form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<TypeConstraintError> for FormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

/// Fails with [`FormError::Spam`] when the honeypot carries any value.
pub fn reject_spam(honeypot: &str) -> Result<(), FormError> {
    if honeypot.trim().is_empty() {
        Ok(())
    } else {
        Err(FormError::Spam)
    }
}

/// Number of whitespace-separated words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

pub(crate) fn trimmed(value: String) -> String {
    value.trim().to_string()
}

/// `None` for blank input.
pub(crate) fn optional(value: String) -> Option<String> {
    let value = trimmed(value);
    if value.is_empty() { None } else { Some(value) }
}

/// Appends `(name, value)` when the value is present.
pub(crate) fn push_optional(
    fields: &mut Vec<(&'static str, String)>,
    name: &'static str,
    value: Option<String>,
) {
    if let Some(value) = value {
        fields.push((name, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_message_per_field() {
        let mut errors = FieldErrors::new();
        errors.insert("article", "too long");
        errors.insert("article", "empty");
        assert_eq!(errors.get("article"), Some("too long"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn counts_words_across_whitespace_runs() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words(" one\ttwo \n three  "), 3);
    }

    #[test]
    fn honeypot_with_whitespace_only_is_ignored() {
        assert_eq!(reject_spam("  "), Ok(()));
        assert_eq!(reject_spam("http://spam.example"), Err(FormError::Spam));
    }

    #[test]
    fn displays_errors_in_field_order() {
        let mut errors = FieldErrors::new();
        errors.insert("name", "Name is required");
        errors.insert("email", "Email is required");
        assert_eq!(
            errors.to_string(),
            "email: Email is required; name: Name is required"
        );
    }
}
