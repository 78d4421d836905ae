//! Risk scoring
//!
//! No trained model is wired in yet. [`RandomScorer`] stands in for one and
//! draws a uniform percentage, which keeps the whole form usable end to end.

use rand::prelude::*;

use crate::error::Result;
use crate::models::{FeatureVector, Percentage};

/// Turns a feature vector into a percentage risk score
pub trait Scorer {
    /// Score one feature vector
    fn score(&mut self, features: &FeatureVector) -> Result<Percentage>;
}

/// Placeholder scorer returning a uniformly random percentage
#[derive(Debug, Clone)]
pub struct RandomScorer {
    rng: StdRng,
}

impl RandomScorer {
    /// Create a scorer with an optional seed
    ///
    /// With a seed the sequence of scores is reproducible; without one the
    /// RNG is seeded from the operating system.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl Default for RandomScorer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Scorer for RandomScorer {
    fn score(&mut self, features: &FeatureVector) -> Result<Percentage> {
        let value = self
            .rng
            .random_range(i64::from(Percentage::MIN)..=i64::from(Percentage::MAX));
        log::debug!("Scored {} features: {value}", features.len());
        Percentage::new(value)
    }
}
