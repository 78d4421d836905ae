//! A typed clinical input form: a field schema registry, a conversion
//! pipeline from raw answers to a model-ready feature vector, and a
//! placeholder heart disease risk scorer.

pub mod config;
pub mod conversion;
pub mod error;
pub mod input;
pub mod models;
pub mod schema;
pub mod scoring;
pub mod session;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{FormConfig, PipelineConfig};
pub use error::{FormError, Result};
pub use models::{FeatureVector, FieldValue, Percentage, RawAnswers};
pub use schema::{FieldDescriptor, FieldType, Schema, heart_disease_schema};

// Pipeline and scoring
pub use conversion::{build_feature_vector, build_feature_vector_today, convert_field};
pub use scoring::{RandomScorer, Scorer};
pub use session::{Evaluation, Session};

// Input collection
pub use input::{AnswerSource, JsonAnswerSource, PromptSource, WidgetKind, collect_answers, widget_for};
