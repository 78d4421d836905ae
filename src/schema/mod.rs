//! Field schema registry for the input form.

pub mod field_def;
pub mod registry_fields;

pub use field_def::{
    CategoryOption, CategoryOptions, FieldDescriptor, FieldType, OptionSource, Schema,
};
pub use registry_fields::{heart_disease_schema, keys};
