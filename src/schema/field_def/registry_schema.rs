//! Form schema definition
//!
//! An ordered, immutable collection of field descriptors keyed by field key.

use rustc_hash::FxHashMap;

use super::field::FieldDescriptor;
use crate::error::Result;
use crate::error::util::{invalid_schema, unknown_field};

/// A unified schema definition for the input form
#[derive(Debug, Clone)]
pub struct Schema {
    name: String,
    fields: Vec<(String, FieldDescriptor)>,
    index: FxHashMap<String, usize>,
}

impl Schema {
    /// Create an empty schema
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Build a schema from fallible descriptors, keeping declaration order
    ///
    /// The first descriptor error (or duplicate key) aborts construction.
    pub fn try_from_fields<K: Into<String>>(
        name: impl Into<String>,
        fields: impl IntoIterator<Item = (K, Result<FieldDescriptor>)>,
    ) -> Result<Self> {
        let mut schema = Self::new(name);
        for (key, descriptor) in fields {
            schema.add_field(key, descriptor?)?;
        }
        Ok(schema)
    }

    /// Append a field to the end of the schema
    pub fn add_field(&mut self, key: impl Into<String>, descriptor: FieldDescriptor) -> Result<()> {
        let key = key.into();
        if self.index.contains_key(&key) {
            return invalid_schema(format!("Field '{key}' is declared more than once"));
        }
        self.index.insert(key.clone(), self.fields.len());
        self.fields.push((key, descriptor));
        Ok(())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a field descriptor by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldDescriptor> {
        self.index.get(key).map(|&idx| &self.fields[idx].1)
    }

    /// Get a field descriptor by key, failing for keys the schema does not declare
    pub fn describe(&self, key: &str) -> Result<&FieldDescriptor> {
        match self.get(key) {
            Some(descriptor) => Ok(descriptor),
            None => unknown_field(key),
        }
    }

    /// Option labels of a field; `None` for non-categorical fields
    pub fn option_labels(&self, key: &str) -> Result<Option<Vec<&str>>> {
        Ok(self.describe(key)?.option_labels())
    }

    /// Check if this schema contains a field with the given key
    #[must_use]
    pub fn has_field(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Iterate over (key, descriptor) in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDescriptor)> {
        self.fields.iter().map(|(k, d)| (k.as_str(), d))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
