//! Field definition for the form schema
//!
//! This module defines the descriptor of a single input field: its label,
//! semantic type and, for categorical fields, the ordered option list.

use std::fmt;

use itertools::Itertools;
use rustc_hash::FxHashSet;

use crate::error::Result;
use crate::error::util::invalid_schema;

/// Represents the semantic type of a field
///
/// Determines which control collects the raw value and which conversion
/// rule applies to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Decimal value entered through a numeric control
    Numerical,
    /// One choice out of a fixed set of labeled options
    Categorical,
    /// Calendar date
    Date,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Numerical => write!(f, "Numerical"),
            FieldType::Categorical => write!(f, "Categorical"),
            FieldType::Date => write!(f, "Date"),
        }
    }
}

/// Options as declared for a categorical field
///
/// A field may either map display labels to codes, or list the raw codes
/// themselves. Both forms are normalized into [`CategoryOption`] pairs when
/// the descriptor is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryOptions {
    /// Display label to code, in declared order
    Mapping(Vec<(String, i64)>),
    /// Plain sequence of codes, each shown as its own label
    Sequence(Vec<i64>),
}

/// Which declaration form the options of a descriptor came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSource {
    Mapping,
    Sequence,
}

/// A normalized (label, code) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    /// Text shown to the user
    pub label: String,
    /// Code handed to the model
    pub code: i64,
}

/// A field descriptor for the form schema
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    label: String,
    field_type: FieldType,
    options: Vec<CategoryOption>,
    option_source: Option<OptionSource>,
}

impl FieldDescriptor {
    /// Create a new field descriptor
    ///
    /// Categorical fields require a non-empty option set with unique labels.
    /// Options supplied for other field types are ignored.
    pub fn new(
        label: impl Into<String>,
        field_type: FieldType,
        options: Option<CategoryOptions>,
    ) -> Result<Self> {
        let label = label.into();

        if field_type != FieldType::Categorical {
            if options.is_some() {
                log::warn!("Ignoring options declared for {field_type} field '{label}'");
            }
            return Ok(Self {
                label,
                field_type,
                options: Vec::new(),
                option_source: None,
            });
        }

        let (options, source) = match options {
            Some(CategoryOptions::Mapping(pairs)) => (
                pairs
                    .into_iter()
                    .map(|(label, code)| CategoryOption { label, code })
                    .collect_vec(),
                OptionSource::Mapping,
            ),
            Some(CategoryOptions::Sequence(codes)) => (
                codes
                    .into_iter()
                    .map(|code| CategoryOption {
                        label: code.to_string(),
                        code,
                    })
                    .collect_vec(),
                OptionSource::Sequence,
            ),
            None => {
                return invalid_schema(format!(
                    "Categorical field '{label}' must declare its options"
                ));
            }
        };

        if options.is_empty() {
            return invalid_schema(format!(
                "Categorical field '{label}' must declare at least one option"
            ));
        }

        let mut seen = FxHashSet::default();
        if let Some(dup) = options.iter().find(|opt| !seen.insert(opt.label.as_str())) {
            return invalid_schema(format!(
                "Categorical field '{label}' declares option '{}' more than once",
                dup.label
            ));
        }

        Ok(Self {
            label,
            field_type,
            options,
            option_source: Some(source),
        })
    }

    /// Create a numerical field descriptor
    pub fn numerical(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            field_type: FieldType::Numerical,
            options: Vec::new(),
            option_source: None,
        }
    }

    /// Create a date field descriptor
    pub fn date(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            field_type: FieldType::Date,
            options: Vec::new(),
            option_source: None,
        }
    }

    /// Create a categorical field descriptor from label/code pairs
    pub fn categorical<L: Into<String>>(
        label: impl Into<String>,
        options: impl IntoIterator<Item = (L, i64)>,
    ) -> Result<Self> {
        let pairs = options.into_iter().map(|(l, c)| (l.into(), c)).collect_vec();
        Self::new(label, FieldType::Categorical, Some(CategoryOptions::Mapping(pairs)))
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Normalized options; empty for non-categorical fields
    #[must_use]
    pub fn options(&self) -> &[CategoryOption] {
        &self.options
    }

    #[must_use]
    pub fn option_source(&self) -> Option<OptionSource> {
        self.option_source
    }

    /// Option labels in declared order, or `None` for non-categorical fields
    #[must_use]
    pub fn option_labels(&self) -> Option<Vec<&str>> {
        (self.field_type == FieldType::Categorical)
            .then(|| self.options.iter().map(|opt| opt.label.as_str()).collect_vec())
    }

    /// Look up the code of an option label
    #[must_use]
    pub fn code_for(&self, label: &str) -> Option<i64> {
        self.options
            .iter()
            .find(|opt| opt.label == label)
            .map(|opt| opt.code)
    }
}
