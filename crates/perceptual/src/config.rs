//! Configuration and error types for winnowing fingerprints.
//!
//! The fingerprint is a pure function of `(sanitized_text, config)`. Two
//! fingerprints are only comparable when they were built with the same `k`,
//! `w` and digest.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hasher::DigestAlgorithm;

/// Configuration for the k-gram / hash / winnow pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PerceptualConfig {
    /// Configuration schema version.
    ///
    /// Any change that can affect fingerprint output must bump this.
    pub version: u32,
    /// Number of characters per k-gram.
    pub k: usize,
    /// Number of consecutive hashes per winnowing window.
    pub w: usize,
    /// Digest each k-gram is hashed with before truncation to 32 bits.
    pub digest: DigestAlgorithm,
    /// Hash k-grams on the rayon pool. Output is identical either way.
    pub use_parallel: bool,
}

impl PerceptualConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_w(mut self, w: usize) -> Self {
        self.w = w;
        self
    }

    pub fn with_digest(mut self, digest: DigestAlgorithm) -> Self {
        self.digest = digest;
        self
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    /// Smallest sanitized length (in chars) that yields at least one window.
    ///
    /// Texts of length `k..=k+w-2` produce k-grams but no full window and
    /// therefore an empty fingerprint.
    pub fn min_fingerprint_len(&self) -> usize {
        self.k + self.w.saturating_sub(1)
    }

    /// Whether fingerprints built under `self` and `other` are comparable.
    ///
    /// `use_parallel` only changes scheduling, never output, so it is ignored.
    pub fn produces_same_fingerprints(&self, other: &Self) -> bool {
        self.version == other.version
            && self.k == other.k
            && self.w == other.w
            && self.digest == other.digest
    }

    pub fn validate(&self) -> Result<(), PerceptualError> {
        if self.version < 1 {
            return Err(PerceptualError::InvalidConfigVersion {
                version: self.version,
            });
        }
        if self.k < 1 {
            return Err(PerceptualError::InvalidConfigK { k: self.k });
        }
        if self.w < 1 {
            return Err(PerceptualError::InvalidConfigW { w: self.w });
        }
        Ok(())
    }
}

impl Default for PerceptualConfig {
    fn default() -> Self {
        Self {
            version: 1,
            k: 20,
            w: 10,
            digest: DigestAlgorithm::Md5,
            use_parallel: false,
        }
    }
}

/// Errors returned when building a fingerprinter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PerceptualError {
    #[error("invalid config: k must be >= 1 (got {k})")]
    InvalidConfigK { k: usize },

    #[error("invalid config: w must be >= 1 (got {w})")]
    InvalidConfigW { w: usize },

    #[error("invalid config version {version}; expected >= 1")]
    InvalidConfigVersion { version: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let cfg = PerceptualConfig::default();
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.k, 20);
        assert_eq!(cfg.w, 10);
        assert_eq!(cfg.digest, DigestAlgorithm::Md5);
        assert!(!cfg.use_parallel);
        assert_eq!(cfg.min_fingerprint_len(), 29);
    }

    #[test]
    fn config_builder_chain() {
        let cfg = PerceptualConfig::new()
            .with_k(5)
            .with_w(3)
            .with_digest(DigestAlgorithm::Sha256)
            .with_parallel(true);

        assert_eq!(cfg.k, 5);
        assert_eq!(cfg.w, 3);
        assert_eq!(cfg.digest, DigestAlgorithm::Sha256);
        assert!(cfg.use_parallel);
    }

    #[test]
    fn config_validate_invalid_k_zero() {
        let cfg = PerceptualConfig::new().with_k(0);
        assert!(matches!(
            cfg.validate(),
            Err(PerceptualError::InvalidConfigK { k: 0 })
        ));
    }

    #[test]
    fn config_validate_invalid_w_zero() {
        let cfg = PerceptualConfig::new().with_w(0);
        assert!(matches!(
            cfg.validate(),
            Err(PerceptualError::InvalidConfigW { w: 0 })
        ));
    }

    #[test]
    fn config_validate_invalid_version_zero() {
        let cfg = PerceptualConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(PerceptualError::InvalidConfigVersion { version: 0 })
        ));
    }

    #[test]
    fn config_partial_json_uses_defaults() {
        let cfg: PerceptualConfig = serde_json::from_str(r#"{"digest": "sha256"}"#).unwrap();
        assert_eq!(cfg.k, 20);
        assert_eq!(cfg.digest, DigestAlgorithm::Sha256);
    }

    #[test]
    fn parallelism_does_not_affect_comparability() {
        let seq = PerceptualConfig::default();
        assert!(seq.produces_same_fingerprints(&seq.clone().with_parallel(true)));
        assert!(!seq.produces_same_fingerprints(&seq.clone().with_k(19)));
        assert!(!seq.produces_same_fingerprints(&seq.clone().with_w(9)));
        assert!(!seq.produces_same_fingerprints(&seq.clone().with_digest(DigestAlgorithm::Sha256)));
    }

    #[test]
    fn error_display_invalid_config_k() {
        let err = PerceptualError::InvalidConfigK { k: 0 };
        assert!(err.to_string().contains("k must be >= 1"));
    }
}
