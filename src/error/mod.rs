//! Error handling for the heart risk form.

use std::io;

pub mod util;

/// Specialized error type for schema construction, answer collection and conversion
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// The schema declaration is not valid (raised at startup)
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// A field required by the pipeline has no answer
    #[error("Missing field: {0}")]
    MissingField(String),

    /// An answer refers to a key the schema does not declare
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// An answer has the wrong kind of value for its field
    #[error("Type mismatch for field '{field}': expected {expected}, found {found}")]
    TypeMismatch {
        /// Field key
        field: String,
        /// Expected value kind
        expected: &'static str,
        /// Value kind actually supplied
        found: &'static str,
    },

    /// A date could not be parsed or lies outside the allowed range
    #[error("Invalid date for field '{field}': {message}")]
    InvalidDate {
        /// Field key
        field: String,
        /// Description of the problem
        message: String,
    },

    /// A scorer produced a value outside of [1, 100]
    #[error("Score out of range: {0} (expected 1..=100)")]
    ScoreOutOfRange(i64),

    /// Error reading input or writing output
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error reading or writing JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for heart risk form operations
pub type Result<T> = std::result::Result<T, FormError>;
