//! Answers read from a JSON document
//!
//! The document is a single object keyed by field key. Values are coerced
//! according to the control of each field:
//!
//! * dates come from strings in any accepted date format
//! * numeric fields take JSON numbers
//! * categorical fields take the option label as a string; a JSON number is
//!   passed through as-is

use std::fs;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde_json::{Map, Value};

use super::date_utils::{DateFormatConfig, parse_date_string};
use super::{AnswerSource, WidgetKind};
use crate::config::{DateBounds, FormConfig};
use crate::error::util::{invalid_date, missing_field};
use crate::error::{FormError, Result};
use crate::models::FieldValue;
use crate::schema::{FieldDescriptor, Schema};

/// Answer source backed by a parsed JSON object
#[derive(Debug, Clone)]
pub struct JsonAnswerSource {
    values: Map<String, Value>,
    date_formats: DateFormatConfig,
    date_bounds: DateBounds,
    today: NaiveDate,
}

impl JsonAnswerSource {
    /// Parse answers from a JSON string
    pub fn from_json_str(json: &str, config: &FormConfig, today: NaiveDate) -> Result<Self> {
        let values: Map<String, Value> = serde_json::from_str(json)?;
        Ok(Self::from_map(values, config, today))
    }

    /// Parse answers from a reader
    pub fn from_reader<R: Read>(reader: R, config: &FormConfig, today: NaiveDate) -> Result<Self> {
        let values: Map<String, Value> = serde_json::from_reader(reader)?;
        Ok(Self::from_map(values, config, today))
    }

    /// Parse answers from a file
    pub fn from_path(path: &Path, config: &FormConfig, today: NaiveDate) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents, config, today)
    }

    fn from_map(values: Map<String, Value>, config: &FormConfig, today: NaiveDate) -> Self {
        Self {
            values,
            date_formats: config.date_formats.clone(),
            date_bounds: config.date_bounds,
            today,
        }
    }

    /// Keys present in the document that the schema does not declare
    #[must_use]
    pub fn unused_keys(&self, schema: &Schema) -> Vec<&str> {
        self.values
            .keys()
            .map(String::as_str)
            .filter(|key| !schema.has_field(key))
            .collect()
    }

    fn date(&self, key: &str, value: &Value) -> Result<FieldValue> {
        let Value::String(text) = value else {
            return json_mismatch(key, "date string", value);
        };
        let Some(date) = parse_date_string(text, &self.date_formats) else {
            return invalid_date(key, format!("'{text}' is not a recognized date"));
        };

        let min = self.date_bounds.min;
        let max = self.date_bounds.max_or(self.today);
        if date < min || date > max {
            return invalid_date(key, format!("{date} is outside {min} to {max}"));
        }
        Ok(FieldValue::Date(date))
    }
}

impl AnswerSource for JsonAnswerSource {
    fn answer(&mut self, key: &str, _field: &FieldDescriptor, widget: WidgetKind) -> Result<FieldValue> {
        let Some(value) = self.values.get(key) else {
            return missing_field(key);
        };

        match widget {
            WidgetKind::DatePicker => self.date(key, value),
            WidgetKind::NumericStepper => match value.as_f64() {
                Some(n) => Ok(FieldValue::Number(n)),
                None => json_mismatch(key, "number", value),
            },
            WidgetKind::SingleSelect => match value {
                Value::String(label) => Ok(FieldValue::Label(label.clone())),
                Value::Number(n) => Ok(n.as_i64().map_or_else(
                    || FieldValue::Number(n.as_f64().unwrap_or_default()),
                    FieldValue::Code,
                )),
                _ => json_mismatch(key, "option label", value),
            },
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn json_mismatch<T>(key: &str, expected: &'static str, value: &Value) -> Result<T> {
    Err(FormError::TypeMismatch {
        field: key.to_string(),
        expected,
        found: json_kind(value),
    })
}
