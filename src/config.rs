//! YAML configuration for the codefp pipeline.
//!
//! One file carries every stage configuration plus an optional reference
//! corpus. Each section falls back to its defaults when omitted.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "exam-week-3"
//!
//! canonical:
//!   strip_line_comments: true
//!   strip_block_comments: true
//!   lowercase: true
//!
//! perceptual:
//!   k: 20
//!   w: 10
//!   digest: "md5"
//!   use_parallel: false
//!
//! matcher:
//!   flag_threshold: 0.85
//!
//! corpus:
//!   - id: "algo_002"
//!     name: "Factorial Recursive"
//!     content: |
//!       const factorial = (n) => {
//!           if (n === 0 || n === 1) return 1;
//!           return n * factorial(n - 1);
//!       }
//! ```
//!
//! When `corpus` is absent the built-in reference set is used. An explicit
//! empty list yields an empty corpus, in which case nothing is ever flagged.

use std::fs;
use std::path::Path;

use canonical::SanitizeConfig;
use matcher::{builtin_references, MatchConfig, MatchError, Matcher, ReferenceSource};
use perceptual::PerceptualConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),

    #[error("failed to build matcher: {0}")]
    Matcher(#[from] MatchError),
}

/// Top-level pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CodefpConfig {
    /// Configuration format version
    pub version: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub canonical: SanitizeConfig,

    #[serde(default)]
    pub perceptual: PerceptualConfig,

    #[serde(default)]
    pub matcher: MatchConfig,

    /// Reference documents. `None` selects the built-in set.
    #[serde(default)]
    pub corpus: Option<Vec<ReferenceSource>>,
}

impl CodefpConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: CodefpConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.canonical
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("canonical: {err}")))?;
        self.perceptual
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("perceptual: {err}")))?;
        self.matcher
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("matcher: {err}")))?;

        Ok(())
    }

    /// The configured reference sources, or the built-in set.
    pub fn reference_sources(&self) -> Vec<ReferenceSource> {
        match &self.corpus {
            Some(sources) => sources.clone(),
            None => builtin_references(),
        }
    }

    /// Fingerprint the corpus and build the matcher described by this file.
    pub fn build_matcher(&self) -> Result<Matcher, ConfigLoadError> {
        let matcher = Matcher::from_sources(
            &self.canonical,
            &self.perceptual,
            self.matcher.clone(),
            self.reference_sources(),
        )?;
        tracing::info!(
            config = self.name.as_deref().unwrap_or("unnamed"),
            corpus_size = matcher.corpus().len(),
            k = self.perceptual.k,
            w = self.perceptual.w,
            digest = self.perceptual.digest.name(),
            flag_threshold = self.matcher.flag_threshold,
            "matcher built from configuration"
        );
        Ok(matcher)
    }
}

impl Default for CodefpConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            canonical: SanitizeConfig::default(),
            perceptual: PerceptualConfig::default(),
            matcher: MatchConfig::default(),
            corpus: None,
        }
    }
}
