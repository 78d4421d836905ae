//! Post-processing rules applied after per-field encoding

use std::num::NonZeroU32;

use chrono::NaiveDate;

use crate::error::Result;
use crate::error::util::{missing_field, type_mismatch};
use crate::models::{FieldValue, RawAnswers};

/// Age in whole "years" between a birth date and today
///
/// Floor division, so a birth date in the future yields a negative age.
#[must_use]
pub fn age_from_birth_date(birth: NaiveDate, today: NaiveDate, days_per_year: NonZeroU32) -> i64 {
    (today - birth).num_days().div_euclid(i64::from(days_per_year.get()))
}

/// Encode a fasting blood sugar reading: 0 below the threshold, 1 otherwise
#[must_use]
pub fn binarize_fbs(value: f64, threshold: f64) -> i64 {
    if value < threshold { 0 } else { 1 }
}

/// Fetch the raw date answer for `key`
pub(crate) fn require_date(answers: &RawAnswers, key: &str) -> Result<NaiveDate> {
    match answers.get(key) {
        Some(FieldValue::Date(date)) => Ok(*date),
        Some(other) => type_mismatch(key, "date", other),
        None => missing_field(key),
    }
}

/// Fetch the raw numeric answer for `key`
pub(crate) fn require_number(answers: &RawAnswers, key: &str) -> Result<f64> {
    match answers.get(key) {
        Some(value) => match value.as_f64() {
            Some(n) => Ok(n),
            None => type_mismatch(key, "number", value),
        },
        None => missing_field(key),
    }
}
