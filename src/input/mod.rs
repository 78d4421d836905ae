//! Answer collection
//!
//! The form visits every schema field in order, selects the control for the
//! field type and asks an [`AnswerSource`] for the raw value.

pub mod date_utils;
pub mod file;
pub mod prompt;
pub mod widget;

pub use file::JsonAnswerSource;
pub use prompt::PromptSource;
pub use widget::{WidgetKind, widget_for};

use crate::error::Result;
use crate::models::{FieldValue, RawAnswers};
use crate::schema::{FieldDescriptor, Schema};

/// Something that can produce a raw value for a field
pub trait AnswerSource {
    /// Produce the raw value of one field
    ///
    /// # Arguments
    /// * `key` - The schema key of the field
    /// * `field` - Its descriptor
    /// * `widget` - The control selected for its type
    fn answer(&mut self, key: &str, field: &FieldDescriptor, widget: WidgetKind)
    -> Result<FieldValue>;
}

/// Collect one raw answer per schema field, in schema order
pub fn collect_answers(schema: &Schema, source: &mut dyn AnswerSource) -> Result<RawAnswers> {
    let mut answers = RawAnswers::new();
    for (key, field) in schema.iter() {
        let widget = widget_for(field.field_type());
        let value = source.answer(key, field, widget)?;
        log::debug!("Collected {key} = {value} via {widget}");
        answers.insert(key, value);
    }
    Ok(answers)
}
