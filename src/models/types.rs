//! Common value type shared by raw answers and feature vectors

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// A single value collected from a control or produced by conversion
///
/// Raw answers hold whatever the control produced (a number, a selected
/// label or a date). Conversion replaces categorical labels with codes and
/// leaves everything else untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Decimal value from a numeric control
    Number(f64),
    /// Integer code produced by categorical encoding
    Code(i64),
    /// Display label selected by the user
    Label(String),
    /// Calendar date
    Date(NaiveDate),
}

impl FieldValue {
    /// Short name of the value kind, used in error messages
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Code(_) => "code",
            Self::Label(_) => "label",
            Self::Date(_) => "date",
        }
    }

    /// Numeric view of the value, if it has one
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Code(c) => Some(*c as f64),
            Self::Label(_) | Self::Date(_) => None,
        }
    }

    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_label(&self) -> Option<&str> {
        match self {
            Self::Label(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Code(c) => write!(f, "{c}"),
            Self::Label(s) => write!(f, "{s}"),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Code(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Label(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Label(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}
