//! Configuration for the sanitizer.
//!
//! The defaults reproduce the reference behavior exactly. Any change to how
//! text is sanitized must bump `version`, since fingerprints built under
//! different sanitization rules are not comparable.
//!
//! ```rust
//! use canonical::SanitizeConfig;
//!
//! let config = SanitizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(config.strip_line_comments);
//! assert!(config.strip_block_comments);
//! assert!(config.lowercase);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Configuration for the sanitizing pass.
///
/// Every field has a default so partial YAML/JSON documents deserialize:
///
/// ```json
/// { "version": 1, "lowercase": true }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SanitizeConfig {
    /// Version of the sanitization rules. Must be >= 1.
    pub version: u32,
    /// Remove `//` comments through end of line.
    pub strip_line_comments: bool,
    /// Remove `/* ... */` comments, including multi-line ones.
    pub strip_block_comments: bool,
    /// Lowercase the remaining characters.
    pub lowercase: bool,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            strip_line_comments: true,
            strip_block_comments: true,
            lowercase: true,
        }
    }
}

impl SanitizeConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(SanitizeConfig::default().validate().is_ok());
    }

    #[test]
    fn version_zero_rejected() {
        let cfg = SanitizeConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(CanonicalError::InvalidConfig(_))
        ));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let cfg: SanitizeConfig = serde_json::from_str(r#"{"lowercase": false}"#).unwrap();
        assert_eq!(cfg.version, 1);
        assert!(!cfg.lowercase);
        assert!(cfg.strip_line_comments);
    }
}
