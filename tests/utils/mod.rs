use chrono::NaiveDate;

use heart_risk::models::{FeatureVector, Percentage, RawAnswers};
use heart_risk::{Result, Scorer};

/// Fixed reference date for age calculations
#[must_use]
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Shorthand date constructor
#[must_use]
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A complete set of answers as the form would collect them
#[must_use]
pub fn sample_answers() -> RawAnswers {
    RawAnswers::new()
        .with("date", ymd(1970, 1, 1))
        .with("gender", "female")
        .with("cp", "atypical angina")
        .with("restbps", 130.0)
        .with("chol", 250.0)
        .with("fbs", 119.0)
        .with("restecg", "having ST-T wave abnormality")
        .with("thalach", 187.0)
        .with("exang", "No")
        .with("oldpeak", 3.5)
        .with("slope", "downsloping value")
        .with("ca", "0")
        .with("thal", "reversible defect")
}

/// The same patient as [`sample_answers`], as an answers file
pub const SAMPLE_ANSWERS_JSON: &str = r#"{
    "date": "1970-01-01",
    "gender": "female",
    "cp": "atypical angina",
    "restbps": 130,
    "chol": 250,
    "fbs": 119,
    "restecg": "having ST-T wave abnormality",
    "thalach": 187,
    "exang": "No",
    "oldpeak": 3.5,
    "slope": "downsloping value",
    "ca": "0",
    "thal": "reversible defect"
}"#;

/// Scorer returning a preset sequence of values and counting its calls
pub struct ScriptedScorer {
    values: Vec<i64>,
    /// Number of times `score` was called
    pub calls: usize,
    /// Size of every feature vector seen
    pub seen_lengths: Vec<usize>,
}

impl ScriptedScorer {
    #[must_use]
    pub fn new(values: Vec<i64>) -> Self {
        Self {
            values,
            calls: 0,
            seen_lengths: Vec::new(),
        }
    }
}

impl Scorer for ScriptedScorer {
    fn score(&mut self, features: &FeatureVector) -> Result<Percentage> {
        let value = self.values[self.calls % self.values.len()];
        self.calls += 1;
        self.seen_lengths.push(features.len());
        Percentage::new(value)
    }
}
