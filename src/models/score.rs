//! Percentage score produced by a scorer

use serde::Serialize;
use std::fmt;

use crate::error::{FormError, Result};

/// Integer percentage guaranteed to lie in `[1, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Smallest valid score
    pub const MIN: u8 = 1;
    /// Largest valid score
    pub const MAX: u8 = 100;

    /// Validate a raw score
    pub fn new(value: i64) -> Result<Self> {
        match u8::try_from(value) {
            Ok(v) if (Self::MIN..=Self::MAX).contains(&v) => Ok(Self(v)),
            _ => Err(FormError::ScoreOutOfRange(value)),
        }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
