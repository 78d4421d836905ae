//! Domain models for the heart risk form
//!
//! This module contains the values that flow through one interaction cycle:
//! raw answers in, feature vector out, percentage score at the end.

pub mod answers;
pub mod features;
pub mod score;
pub mod types;

// Re-export commonly used types
pub use answers::RawAnswers;
pub use features::FeatureVector;
pub use score::Percentage;
pub use types::FieldValue;
