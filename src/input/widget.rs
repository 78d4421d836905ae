//! Control selection per field type

use std::fmt;

use crate::schema::FieldType;

/// The kind of input control used to collect a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Free decimal entry
    NumericStepper,
    /// Single choice from the field's option labels
    SingleSelect,
    /// Bounded calendar date entry
    DatePicker,
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetKind::NumericStepper => write!(f, "number"),
            WidgetKind::SingleSelect => write!(f, "select"),
            WidgetKind::DatePicker => write!(f, "date"),
        }
    }
}

/// Pick the control for a field type
#[must_use]
pub const fn widget_for(field_type: FieldType) -> WidgetKind {
    match field_type {
        FieldType::Numerical => WidgetKind::NumericStepper,
        FieldType::Categorical => WidgetKind::SingleSelect,
        FieldType::Date => WidgetKind::DatePicker,
    }
}
