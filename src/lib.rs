//! Workspace umbrella crate for codefp, source-code similarity fingerprinting.
//!
//! This crate stitches the sanitizer (`canonical`), the winnowing
//! fingerprinter (`perceptual`) and the corpus matcher (`matcher`) together
//! behind one API, and loads the pipeline configuration from YAML.
//!
//! ```
//! use codefp::{fingerprint_text, similarity};
//!
//! let a = "function add(a, b) { return a + b; } // sum\nconsole.log(add(1, 2));";
//! let b = "FUNCTION ADD(A,B){RETURN A+B;}CONSOLE.LOG(ADD(1,2));";
//! assert!(!fingerprint_text(a).is_empty());
//! assert_eq!(fingerprint_text(a), fingerprint_text(b));
//! assert_eq!(similarity(a, b), 1.0);
//! ```

pub mod config;

pub use canonical::{
    sanitize, strip_comments, strip_whitespace, CanonicalError, SanitizeConfig, SanitizedText,
    Sanitizer,
};
pub use matcher::{
    builtin_references, jaccard, score_percent, set_match_metrics, Corpus, FingerprintEngine,
    MatchConfig, MatchError, MatchMetrics, MatchResult, Matcher, ReferenceEntry, ReferenceSource,
};
pub use perceptual::{
    hash_kgram, hash_kgrams, kgram_count, kgrams, perceptualize, winnow, DigestAlgorithm,
    Fingerprint, HashValue, PerceptualConfig, PerceptualError, Winnower,
};

pub use crate::config::{CodefpConfig, ConfigLoadError};

use once_cell::sync::Lazy;

static DEFAULT_ENGINE: Lazy<FingerprintEngine> = Lazy::new(FingerprintEngine::default);

/// Default engine shared by [`fingerprint_text`] and [`similarity`].
pub fn default_engine() -> &'static FingerprintEngine {
    &DEFAULT_ENGINE
}

/// Fingerprint raw source text with the default configuration
/// (k = 20, w = 10, MD5).
pub fn fingerprint_text(text: &str) -> Fingerprint {
    DEFAULT_ENGINE.fingerprint(text)
}

/// Jaccard similarity of two raw texts under the default configuration.
pub fn similarity(left: &str, right: &str) -> f64 {
    jaccard(&fingerprint_text(left), &fingerprint_text(right))
}
