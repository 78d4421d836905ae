//! Configuration for the heart risk form.

use std::num::NonZeroU32;

use chrono::NaiveDate;

use crate::input::date_utils::DateFormatConfig;

/// Environment variable holding a fixed RNG seed for the scorer
pub const SEED_ENV: &str = "HEART_RISK_SEED";
/// Environment variable overriding the age divisor
pub const DAYS_PER_YEAR_ENV: &str = "HEART_RISK_DAYS_PER_YEAR";
/// Environment variable overriding the fasting blood sugar threshold
pub const FBS_THRESHOLD_ENV: &str = "HEART_RISK_FBS_THRESHOLD";

/// Default age divisor (356, the form's historical value, not 365).
///
/// Set `HEART_RISK_DAYS_PER_YEAR=365` for calendar years.
pub const DEFAULT_DAYS_PER_YEAR: u32 = 356;

/// Fasting blood sugar values at or above this level are encoded as 1
pub const DEFAULT_FBS_THRESHOLD: f64 = 120.0;

/// Rules applied by the conversion pipeline after per-field encoding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Divisor turning an age in days into years
    pub days_per_year: NonZeroU32,
    /// Threshold for binarizing fasting blood sugar
    pub fbs_threshold: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            days_per_year: NonZeroU32::new(DEFAULT_DAYS_PER_YEAR).unwrap_or(NonZeroU32::MIN),
            fbs_threshold: DEFAULT_FBS_THRESHOLD,
        }
    }
}

/// Bounds and default of the date of birth picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    /// Earliest selectable date
    pub min: NaiveDate,
    /// Latest selectable date; `None` means today
    pub max: Option<NaiveDate>,
    /// Date used when the user accepts the default
    pub default: NaiveDate,
}

impl DateBounds {
    /// Latest selectable date, resolving "today" against the given date
    #[must_use]
    pub fn max_or(&self, today: NaiveDate) -> NaiveDate {
        self.max.unwrap_or(today)
    }
}

impl Default for DateBounds {
    fn default() -> Self {
        Self {
            min: NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN),
            max: None,
            default: NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN),
        }
    }
}

/// Configuration for the form session
#[derive(Debug, Clone, Default)]
pub struct FormConfig {
    /// Conversion rules
    pub pipeline: PipelineConfig,
    /// Accepted date formats for typed and file answers
    pub date_formats: DateFormatConfig,
    /// Date of birth picker bounds
    pub date_bounds: DateBounds,
    /// Fixed scorer seed; `None` draws from OS entropy
    pub random_seed: Option<u64>,
}

impl FormConfig {
    /// Build a configuration from the defaults overridden by environment variables
    ///
    /// Values that fail to parse are ignored with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(seed) = parse_var::<u64>(&lookup, SEED_ENV) {
            config.random_seed = Some(seed);
        }

        if let Some(days) = parse_var::<NonZeroU32>(&lookup, DAYS_PER_YEAR_ENV) {
            config.pipeline.days_per_year = days;
        }

        if let Some(threshold) = parse_var::<f64>(&lookup, FBS_THRESHOLD_ENV) {
            if threshold.is_finite() {
                config.pipeline.fbs_threshold = threshold;
            } else {
                log::warn!("Ignoring non-finite {FBS_THRESHOLD_ENV}={threshold}");
            }
        }

        config
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Option<T> {
    let raw = lookup(name)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring invalid value for {name}: '{raw}'");
            None
        }
    }
}
