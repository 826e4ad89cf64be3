use std::borrow::Cow;

use crate::comments::{strip_block_comments, strip_line_comments};
use crate::config::SanitizeConfig;
use crate::error::CanonicalError;
use crate::text::SanitizedText;
use crate::whitespace::strip_whitespace;

/// A validated sanitizer.
///
/// Configuration is checked once in [`Sanitizer::new`]; sanitizing text is
/// then infallible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sanitizer {
    cfg: SanitizeConfig,
}

impl Sanitizer {
    pub fn new(cfg: &SanitizeConfig) -> Result<Self, CanonicalError> {
        cfg.validate()?;
        Ok(Self { cfg: cfg.clone() })
    }

    pub fn config(&self) -> &SanitizeConfig {
        &self.cfg
    }

    /// Sanitize `input`: line comments, block comments, whitespace, case.
    pub fn sanitize(&self, input: &str) -> SanitizedText {
        let without_line: Cow<str> = if self.cfg.strip_line_comments {
            strip_line_comments(input)
        } else {
            Cow::Borrowed(input)
        };
        let without_comments: Cow<str> = if self.cfg.strip_block_comments {
            match without_line {
                Cow::Borrowed(rest) => strip_block_comments(rest),
                Cow::Owned(rest) => Cow::Owned(strip_block_comments(&rest).into_owned()),
            }
        } else {
            without_line
        };

        let compact = strip_whitespace(&without_comments);
        // Lowercase the whole string at once so context-sensitive mappings
        // (final sigma) see the compacted neighbours.
        let text = if self.cfg.lowercase {
            compact.to_lowercase()
        } else {
            compact
        };
        SanitizedText::new(text)
    }
}

/// Sanitize `input` with the default configuration.
pub fn sanitize(input: &str) -> SanitizedText {
    Sanitizer::default().sanitize(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pipeline() {
        let input = "/* header */\nfunction twoSum(nums, target) { // loop\n  return [i, j];\n}";
        assert_eq!(
            sanitize(input).as_str(),
            "functiontwosum(nums,target){return[i,j];}"
        );
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = SanitizeConfig {
            version: 0,
            ..Default::default()
        };
        assert!(Sanitizer::new(&cfg).is_err());
    }

    #[test]
    fn keep_case_when_disabled() {
        let cfg = SanitizeConfig {
            lowercase: false,
            ..Default::default()
        };
        let sanitizer = Sanitizer::new(&cfg).unwrap();
        assert_eq!(sanitizer.sanitize("Foo Bar").as_str(), "FooBar");
    }

    #[test]
    fn keep_comments_when_disabled() {
        let cfg = SanitizeConfig {
            strip_line_comments: false,
            strip_block_comments: false,
            ..Default::default()
        };
        let sanitizer = Sanitizer::new(&cfg).unwrap();
        assert_eq!(sanitizer.sanitize("a // b\n/* c */").as_str(), "a//b/*c*/");
    }

    #[test]
    fn only_block_comments_stripped() {
        let cfg = SanitizeConfig {
            strip_line_comments: false,
            ..Default::default()
        };
        let sanitizer = Sanitizer::new(&cfg).unwrap();
        assert_eq!(sanitizer.sanitize("a /* b */ c // d").as_str(), "ac//d");
    }

    #[test]
    fn lowercases_non_ascii() {
        assert_eq!(sanitize("\u{00C9}T\u{00C9}").as_str(), "\u{00E9}t\u{00E9}");
    }

    #[test]
    fn crlf_line_endings() {
        assert_eq!(sanitize("A = 1; // x\r\nB = 2;").as_str(), "a=1;b=2;");
    }
}
