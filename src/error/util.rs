//! Utility functions for error handling
//!
//! Shorthand constructors for the errors raised while collecting and
//! converting answers.

use crate::error::{FormError, Result};
use crate::models::FieldValue;

/// Create a missing field error
///
/// # Arguments
/// * `key` - The key of the field without an answer
pub fn missing_field<T>(key: &str) -> Result<T> {
    Err(FormError::MissingField(key.to_string()))
}

/// Create an unknown field error
pub fn unknown_field<T>(key: &str) -> Result<T> {
    Err(FormError::UnknownField(key.to_string()))
}

/// Create a type mismatch error for a value of the wrong kind
///
/// # Arguments
/// * `key` - The field key
/// * `expected` - The kind of value the field requires
/// * `found` - The value that was supplied
pub fn type_mismatch<T>(key: &str, expected: &'static str, found: &FieldValue) -> Result<T> {
    Err(FormError::TypeMismatch {
        field: key.to_string(),
        expected,
        found: found.kind(),
    })
}

/// Create an invalid schema error
pub fn invalid_schema<T>(message: impl AsRef<str>) -> Result<T> {
    Err(FormError::InvalidSchema(message.as_ref().to_string()))
}

/// Create an invalid date error
pub fn invalid_date<T>(key: &str, message: impl Into<String>) -> Result<T> {
    Err(FormError::InvalidDate {
        field: key.to_string(),
        message: message.into(),
    })
}
