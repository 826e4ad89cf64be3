use canonical::{SanitizeConfig, SanitizedText, Sanitizer};
use perceptual::{Fingerprint, PerceptualConfig, Winnower};

use crate::types::MatchError;

/// Raw text → sanitize → k-grams → hashes → winnow.
///
/// Used both to precompute corpus entries and to fingerprint submissions,
/// so the two sides are always built under the same rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FingerprintEngine {
    sanitizer: Sanitizer,
    winnower: Winnower,
}

impl FingerprintEngine {
    pub fn new(
        sanitize_cfg: &SanitizeConfig,
        perceptual_cfg: &PerceptualConfig,
    ) -> Result<Self, MatchError> {
        Ok(Self {
            sanitizer: Sanitizer::new(sanitize_cfg)?,
            winnower: Winnower::new(perceptual_cfg)?,
        })
    }

    pub fn sanitize_config(&self) -> &SanitizeConfig {
        self.sanitizer.config()
    }

    pub fn perceptual_config(&self) -> &PerceptualConfig {
        self.winnower.config()
    }

    pub fn sanitize(&self, text: &str) -> SanitizedText {
        self.sanitizer.sanitize(text)
    }

    /// Fingerprint raw source text.
    pub fn fingerprint(&self, text: &str) -> Fingerprint {
        let sanitized = self.sanitize(text);
        // Too short for a single k-gram: skip hashing entirely.
        if sanitized.char_len() < self.perceptual_config().k {
            return Fingerprint::new();
        }
        self.winnower.fingerprint(sanitized.as_str())
    }
}
