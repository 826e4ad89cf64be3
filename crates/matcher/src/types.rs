use canonical::CanonicalError;
use perceptual::PerceptualError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::corpus::ReferenceEntry;

/// Policy applied to the best corpus score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatchConfig {
    /// A submission is flagged when its best score is strictly greater than
    /// this value.
    pub flag_threshold: f64,
}

impl MatchConfig {
    pub const DEFAULT_FLAG_THRESHOLD: f64 = 0.85;

    pub fn with_flag_threshold(mut self, threshold: f64) -> Self {
        self.flag_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if !self.flag_threshold.is_finite() || !(0.0..=1.0).contains(&self.flag_threshold) {
            return Err(MatchError::InvalidConfig(format!(
                "flag_threshold must be within [0.0, 1.0] (got {})",
                self.flag_threshold
            )));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            flag_threshold: Self::DEFAULT_FLAG_THRESHOLD,
        }
    }
}

/// Outcome of matching one submission against the corpus.
///
/// `matched_entry` borrows from the matcher's corpus and is only set when the
/// submission is flagged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult<'c> {
    /// Best Jaccard score in `[0, 1]`.
    pub score: f64,
    pub matched_entry: Option<&'c ReferenceEntry>,
    pub is_flagged: bool,
}

impl MatchResult<'_> {
    pub(crate) fn unmatched() -> Self {
        Self {
            score: 0.0,
            matched_entry: None,
            is_flagged: false,
        }
    }

    /// Score as a percentage rounded to one decimal place.
    pub fn score_percent(&self) -> f64 {
        score_percent(self.score)
    }

    pub fn matched_name(&self) -> Option<&str> {
        self.matched_entry.map(|entry| entry.name())
    }
}

/// Convert a `[0, 1]` score to a percentage with one decimal.
pub fn score_percent(score: f64) -> f64 {
    (score * 1000.0).round() / 10.0
}

/// Errors produced while configuring a matcher or building its corpus.
///
/// Matching a submission never fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    #[error("canonical config error: {0}")]
    Canonical(#[from] CanonicalError),
    #[error("perceptual config error: {0}")]
    Perceptual(#[from] PerceptualError),
    #[error("invalid match configuration: {0}")]
    InvalidConfig(String),
    #[error("reference entry at position {position} has an empty id")]
    EmptyReferenceId { position: usize },
    #[error("duplicate reference id '{0}'")]
    DuplicateReference(String),
    #[error("corpus was fingerprinted with a different engine configuration")]
    IncompatibleCorpus,
}
