//! Heart disease form field definitions
//!
//! This module is the single source of truth for the fields the form asks
//! for, their labels, types and option codes.

use crate::error::Result;
use crate::form_schema;
use crate::schema::Schema;

/// Field keys used by the heart disease form and its feature vector
pub mod keys {
    /// Date of birth (consumed to derive `AGE`)
    pub const DATE: &str = "date";
    pub const GENDER: &str = "gender";
    /// Chest pain type
    pub const CP: &str = "cp";
    /// Resting blood pressure
    pub const RESTBPS: &str = "restbps";
    /// Serum cholesterol
    pub const CHOL: &str = "chol";
    /// Fasting blood sugar
    pub const FBS: &str = "fbs";
    /// Resting electrocardiographic results
    pub const RESTECG: &str = "restecg";
    /// Maximum heart rate achieved
    pub const THALACH: &str = "thalach";
    /// Exercise induced angina
    pub const EXANG: &str = "exang";
    /// ST depression induced by exercise
    pub const OLDPEAK: &str = "oldpeak";
    /// Slope of the peak exercise ST-segment
    pub const SLOPE: &str = "slope";
    /// Number of major vessels
    pub const CA: &str = "ca";
    /// Thalassemia
    pub const THAL: &str = "thal";
    /// Derived age, only present in feature vectors
    pub const AGE: &str = "age";
}

/// Build the heart disease input schema
///
/// Fields are declared in the order the form presents them.
pub fn heart_disease_schema() -> Result<Schema> {
    form_schema! {
        name: "heart disease",
        fields: [
            { key: keys::DATE, label: "Date of birth", type: Date },
            {
                key: keys::GENDER,
                label: "Gender",
                type: Categorical,
                options: { "male" => 0, "female" => 1 }
            },
            {
                key: keys::CP,
                label: "Chest pain type",
                type: Categorical,
                options: {
                    "typical angina" => 1,
                    "atypical angina" => 2,
                    "non-anginal pain" => 3,
                    "asymptomatic" => 4,
                }
            },
            { key: keys::RESTBPS, label: "Resting blood pressure (mm Hg)", type: Numerical },
            { key: keys::CHOL, label: "Serum cholesterol (mg/dl)", type: Numerical },
            { key: keys::FBS, label: "Fasting blood sugar (mg/dl)", type: Numerical },
            {
                key: keys::RESTECG,
                label: "Resting electrocardiographic results",
                type: Categorical,
                options: {
                    "normal" => 0,
                    "having ST-T wave abnormality" => 1,
                    "showing probable or definite left ventricular hypertropy by Estes criteria" => 2,
                }
            },
            { key: keys::THALACH, label: "Maximum heart rate achieved (bpm)", type: Numerical },
            {
                key: keys::EXANG,
                label: "Exercise induced angina",
                type: Categorical,
                options: { "Yes" => 1, "No" => 0 }
            },
            {
                key: keys::OLDPEAK,
                label: "ST depression induced by exercise relative to rest",
                type: Numerical
            },
            {
                key: keys::SLOPE,
                label: "The slope of the peak exercise ST-segment",
                type: Categorical,
                options: { "upsloping value" => 1, "flat value" => 2, "downsloping value" => 3 }
            },
            {
                key: keys::CA,
                label: "Number of major vessels uncolored by flouroscopy",
                type: Categorical,
                options: [0, 1, 2, 3]
            },
            {
                key: keys::THAL,
                label: "Thalassemia-caused Defect",
                type: Categorical,
                options: { "normal" => 3, "fixed defect" => 6, "reversible defect" => 7 }
            },
        ]
    }
}
