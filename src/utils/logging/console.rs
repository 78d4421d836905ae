//! Console output utilities
//!
//! This module provides utilities for formatted console output.

use std::io::{self, Write};

use itertools::Itertools;

use crate::error::Result;
use crate::models::{FeatureVector, Percentage};
use crate::schema::Schema;

/// Header line shown above the score bar
#[must_use]
pub fn score_header(score: Percentage) -> String {
    format!("Chance of having Heart Disease {score}")
}

/// Print the score header
pub fn print_score_header(out: &mut impl Write, score: Percentage) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", score_header(score))
}

/// Print the feature vector as pretty JSON
pub fn print_features(out: &mut impl Write, features: &FeatureVector) -> Result<()> {
    writeln!(out, "{}", features.to_json_pretty()?)?;
    Ok(())
}

/// Print every schema field with its type and option labels
pub fn print_schema_info(out: &mut impl Write, schema: &Schema) -> io::Result<()> {
    writeln!(out, "Schema '{}':", schema.name())?;
    for (key, field) in schema.iter() {
        match field.option_labels() {
            Some(labels) => writeln!(
                out,
                "  - {key} ({}): {} [{}]",
                field.field_type(),
                field.label(),
                labels.iter().join(" | ")
            )?,
            None => writeln!(out, "  - {key} ({}): {}", field.field_type(), field.label())?,
        }
    }
    Ok(())
}
