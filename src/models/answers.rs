//! Raw answers collected during one interaction cycle

use std::collections::BTreeMap;

use super::types::FieldValue;

/// Mapping from field key to the raw value its control produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawAnswers {
    values: BTreeMap<String, FieldValue>,
}

impl RawAnswers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning the previous answer for the key if any
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Option<FieldValue> {
        self.values.insert(key.into(), value.into())
    }

    /// Builder-style variant of [`RawAnswers::insert`]
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Drop the answer for a key
    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.values.remove(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for RawAnswers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut answers = Self::new();
        for (key, value) in iter {
            answers.insert(key, value);
        }
        answers
    }
}
