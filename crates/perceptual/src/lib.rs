//! # codefp winnowing fingerprints
//!
//! Turns sanitized source text into a compact, order-insensitive set of
//! 32-bit hashes. The input must already be sanitized; this crate never
//! strips comments, whitespace, or case.
//!
//! ## Pipeline
//!
//! 1.  **K-grams**: the text is cut into overlapping windows of `k` chars.
//! 2.  **Hashing**: each k-gram is digested (MD5 by default) and truncated to
//!     its leading 32 bits.
//! 3.  **Winnowing**: a window of `w` consecutive hashes slides over the
//!     sequence; each window's minimum value goes into a set.
//!
//! Invariant: for the same sanitized text and the same [`PerceptualConfig`],
//! the fingerprint is identical across calls, threads and processes.
//!
//! A text shorter than `k` chars short-circuits to the empty fingerprint.
//! Texts of `k..=k+w-2` chars produce k-grams but no complete window, and
//! also end up empty.
//!
//! ## Example Usage
//!
//! ```
//! use perceptual::{perceptualize, PerceptualConfig};
//!
//! let cfg = PerceptualConfig::default();
//! let text = "functiontwosum(nums,target){for(leti=0;i<nums.length;i++){}}";
//!
//! let fingerprint = perceptualize(text, &cfg).unwrap();
//! assert!(!fingerprint.is_empty());
//! assert!(perceptualize("tooshort", &cfg).unwrap().is_empty());
//! ```

pub mod config;
pub mod fingerprint;
mod hasher;
mod kgram;
mod winnow;

pub use crate::config::{PerceptualConfig, PerceptualError};
pub use crate::fingerprint::Fingerprint;
pub use crate::hasher::{hash_kgram, hash_kgrams, DigestAlgorithm, HashValue};
pub use crate::kgram::{kgram_count, kgrams};
pub use crate::winnow::winnow;

/// Current fingerprint algorithm version for this crate.
pub const PERCEPTUAL_VERSION: u16 = 1;

/// Human-readable algorithm identifier.
pub const PERCEPTUAL_ALGORITHM: &str = "kgram_digest32_winnow_v1";

/// A validated fingerprinter.
///
/// Configuration is checked once in [`Winnower::new`]; fingerprinting is
/// then infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Winnower {
    cfg: PerceptualConfig,
}

impl Winnower {
    pub fn new(cfg: &PerceptualConfig) -> Result<Self, PerceptualError> {
        cfg.validate()?;
        Ok(Self { cfg: cfg.clone() })
    }

    pub fn config(&self) -> &PerceptualConfig {
        &self.cfg
    }

    /// K-gram hashes of `sanitized` in text order, before winnowing.
    pub fn hashes(&self, sanitized: &str) -> Vec<HashValue> {
        let grams = kgrams(sanitized, self.cfg.k);
        hash_kgrams(&grams, &self.cfg)
    }

    /// Fingerprint already-sanitized text.
    pub fn fingerprint(&self, sanitized: &str) -> Fingerprint {
        if sanitized.chars().count() < self.cfg.k {
            return Fingerprint::new();
        }
        winnow(&self.hashes(sanitized), self.cfg.w)
    }
}

impl Default for Winnower {
    fn default() -> Self {
        Self {
            cfg: PerceptualConfig::default(),
        }
    }
}

/// Compute a fingerprint for sanitized text (k-grams → hashes → winnow).
pub fn perceptualize(
    sanitized: &str,
    cfg: &PerceptualConfig,
) -> Result<Fingerprint, PerceptualError> {
    Ok(Winnower::new(cfg)?.fingerprint(sanitized))
}
