use std::sync::Arc;
use std::time::Instant;

use canonical::SanitizeConfig;
use perceptual::PerceptualConfig;

use crate::corpus::{Corpus, ReferenceEntry, ReferenceSource};
use crate::metrics::metrics_recorder;
use crate::pipeline::FingerprintEngine;
use crate::similarity::jaccard;
use crate::types::{MatchConfig, MatchError, MatchResult};


/// Matches submissions against a shared, read-only reference corpus.
///
/// `Matcher` holds no mutable state; share it across threads behind an
/// `Arc` and call [`Matcher::match_submission`] concurrently.
#[derive(Debug, Clone)]
pub struct Matcher {
    engine: FingerprintEngine,
    corpus: Arc<Corpus>,
    config: MatchConfig,
}

impl Matcher {
    /// Construct a matcher from an already-built corpus.
    ///
    /// The corpus must have been fingerprinted with the same engine rules.
    pub fn new(
        engine: FingerprintEngine,
        corpus: Arc<Corpus>,
        config: MatchConfig,
    ) -> Result<Self, MatchError> {
        config.validate()?;
        if !corpus.is_compatible_with(&engine) {
            return Err(MatchError::IncompatibleCorpus);
        }
        Ok(Self {
            engine,
            corpus,
            config,
        })
    }

    /// Build the corpus from `sources` and wrap it in a matcher.
    pub fn from_sources<I>(
        sanitize_cfg: &SanitizeConfig,
        perceptual_cfg: &PerceptualConfig,
        config: MatchConfig,
        sources: I,
    ) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = ReferenceSource>,
    {
        let engine = FingerprintEngine::new(sanitize_cfg, perceptual_cfg)?;
        let corpus = Corpus::build(sources, &engine)?;
        Self::new(engine, Arc::new(corpus), config)
    }

    /// Default engine and threshold over `sources`.
    pub fn with_defaults<I>(sources: I) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = ReferenceSource>,
    {
        Self::from_sources(
            &SanitizeConfig::default(),
            &PerceptualConfig::default(),
            MatchConfig::default(),
            sources,
        )
    }

    pub fn engine(&self) -> &FingerprintEngine {
        &self.engine
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Score `submission` against every reference and classify it.
    ///
    /// The best entry is the first one, in corpus order, that reaches the
    /// maximum score. It is reported only when the score exceeds the flag
    /// threshold.
    pub fn match_submission(&self, submission: &str) -> MatchResult<'_> {
        let start = Instant::now();
        let result = self.best_match(submission);

        tracing::debug!(
            submission_len = submission.len(),
            score = result.score,
            flagged = result.is_flagged,
            matched = result.matched_name().unwrap_or("-"),
            "submission matched"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_match(start.elapsed(), self.corpus.len(), result.is_flagged);
        }

        result
    }

    fn best_match(&self, submission: &str) -> MatchResult<'_> {
        let fingerprint = self.engine.fingerprint(submission);
        if fingerprint.is_empty() || self.corpus.is_empty() {
            return MatchResult::unmatched();
        }

        let mut max_score = 0.0_f64;
        let mut best: Option<&ReferenceEntry> = None;
        for entry in self.corpus.iter() {
            let score = jaccard(&fingerprint, entry.fingerprint());
            // Strict comparison: earlier entries win ties.
            if score > max_score {
                max_score = score;
                best = Some(entry);
            }
        }

        let is_flagged = max_score > self.config.flag_threshold;
        MatchResult {
            score: max_score,
            matched_entry: if is_flagged { best } else { None },
            is_flagged,
        }
    }

    /// Similarity of two raw texts under this matcher's engine.
    pub fn compare(&self, left: &str, right: &str) -> f64 {
        jaccard(
            &self.engine.fingerprint(left),
            &self.engine.fingerprint(right),
        )
    }
}
