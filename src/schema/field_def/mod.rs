//! Module for form field definitions
//!
//! This module provides the field descriptor, the option normalization and
//! the ordered schema that holds them.

pub mod field;
pub mod registry_schema;
mod macros;

pub use field::{CategoryOption, CategoryOptions, FieldDescriptor, FieldType, OptionSource};
pub use registry_schema::Schema;

// Re-export the macro to make it available to users of this module
pub use crate::form_schema;
