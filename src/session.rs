//! Interaction session
//!
//! A session runs one evaluation per completed set of answers and remembers
//! the previous score so the output can move from the old value to the new.

use chrono::NaiveDate;

use crate::config::PipelineConfig;
use crate::conversion::build_feature_vector;
use crate::error::Result;
use crate::models::{FeatureVector, Percentage, RawAnswers};
use crate::schema::Schema;
use crate::scoring::Scorer;

/// Outcome of a single interaction cycle
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Features handed to the scorer
    pub features: FeatureVector,
    /// Score of this cycle
    pub score: Percentage,
    /// Score of the previous successful cycle, if any
    pub previous: Option<Percentage>,
}

impl Evaluation {
    /// Progress position to start the display from (0 before the first score)
    #[must_use]
    pub fn start_position(&self) -> u8 {
        self.previous.map_or(0, Percentage::value)
    }
}

/// State carried between interaction cycles
#[derive(Debug, Clone, Default)]
pub struct Session {
    pipeline: PipelineConfig,
    previous: Option<Percentage>,
    cycles: usize,
}

impl Session {
    #[must_use]
    pub fn new(pipeline: PipelineConfig) -> Self {
        Self {
            pipeline,
            previous: None,
            cycles: 0,
        }
    }

    /// Score of the last successful cycle
    #[must_use]
    pub fn previous(&self) -> Option<Percentage> {
        self.previous
    }

    /// Number of successful cycles so far
    #[must_use]
    pub fn cycles(&self) -> usize {
        self.cycles
    }

    /// Convert, score and record one set of answers
    ///
    /// The scorer is called exactly once, after conversion succeeds. A
    /// failed cycle leaves the session untouched.
    pub fn evaluate(
        &mut self,
        schema: &Schema,
        answers: &RawAnswers,
        scorer: &mut dyn Scorer,
        today: NaiveDate,
    ) -> Result<Evaluation> {
        let features = build_feature_vector(schema, answers, today, &self.pipeline)?;
        let score = scorer.score(&features)?;

        let evaluation = Evaluation {
            features,
            score,
            previous: self.previous,
        };

        self.previous = Some(score);
        self.cycles += 1;

        Ok(evaluation)
    }
}
