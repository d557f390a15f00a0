//! Field validation
//!
//! Validators run after `serde` has decoded a body. They may rewrite values
//! (trim whitespace, fill a derived default) and reject the first invalid
//! field they meet.

use thiserror::Error;

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Name of the offending field
    pub field: String,
    /// Human readable reason
    pub message: String,
}

impl ValidationError {
    /// Create a validation error for `field`
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Post-decode validation for request models
pub trait Validate: Sized {
    /// Check and normalize `self`, returning the value to store
    fn validate(self) -> ValidationResult<Self>;
}

/// Trim `value` and reject it if nothing is left
pub fn non_empty_trimmed(field: &str, value: String) -> ValidationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_trimmed() {
        assert_eq!(
            non_empty_trimmed("name", "  Sample Item  ".to_string()).unwrap(),
            "Sample Item"
        );
        let err = non_empty_trimmed("name", "   ".to_string()).unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.to_string(), "name: must not be empty");
    }
}
