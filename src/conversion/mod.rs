//! Conversion of raw answers into model-ready features
//!
//! Every answer is first encoded on its own according to its field
//! descriptor. Two rules then run unconditionally over the whole set: the
//! date of birth becomes an `age` feature, and fasting blood sugar is
//! binarized against a threshold (replacing whatever the per-field pass
//! produced for it).

pub mod rules;

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::models::{FeatureVector, FieldValue, RawAnswers};
use crate::schema::{FieldDescriptor, FieldType, Schema, keys};

/// Encode a single raw answer
///
/// A categorical label that matches one of the field's options becomes
/// that option's code. Any other value, including a categorical label
/// the field does not know, is returned unchanged.
#[must_use]
pub fn convert_field(descriptor: &FieldDescriptor, raw: &FieldValue) -> FieldValue {
    if descriptor.field_type() != FieldType::Categorical {
        return raw.clone();
    }

    match raw {
        FieldValue::Label(label) => match descriptor.code_for(label) {
            Some(code) => FieldValue::Code(code),
            None => {
                log::debug!(
                    "'{label}' is not an option of '{}', passing it through",
                    descriptor.label()
                );
                raw.clone()
            }
        },
        _ => raw.clone(),
    }
}

/// Build the feature vector for one set of answers
///
/// # Arguments
/// * `schema` - Schema declaring every answered key
/// * `answers` - Raw answers of the current cycle
/// * `today` - Reference date for the age calculation
/// * `config` - Age divisor and blood sugar threshold
///
/// # Errors
/// * `UnknownField` if an answer's key is not in the schema
/// * `MissingField` if `date` or `fbs` has no answer
/// * `TypeMismatch` if `date` is not a date or `fbs` is not numeric
pub fn build_feature_vector(
    schema: &Schema,
    answers: &RawAnswers,
    today: NaiveDate,
    config: &PipelineConfig,
) -> Result<FeatureVector> {
    let mut features = BTreeMap::new();
    for (key, raw) in answers.iter() {
        let descriptor = schema.describe(key)?;
        features.insert(key.to_string(), convert_field(descriptor, raw));
    }

    let birth = rules::require_date(answers, keys::DATE)?;
    let age = rules::age_from_birth_date(birth, today, config.days_per_year);
    log::debug!("Derived age {age} from birth date {birth}");
    features.insert(keys::AGE.to_string(), FieldValue::Code(age));

    let fbs = rules::require_number(answers, keys::FBS)?;
    features.insert(
        keys::FBS.to_string(),
        FieldValue::Code(rules::binarize_fbs(fbs, config.fbs_threshold)),
    );

    features.remove(keys::DATE);

    Ok(FeatureVector::from_map(features))
}

/// Build the feature vector using the local calendar date as today
pub fn build_feature_vector_today(
    schema: &Schema,
    answers: &RawAnswers,
    config: &PipelineConfig,
) -> Result<FeatureVector> {
    build_feature_vector(schema, answers, chrono::Local::now().date_naive(), config)
}
