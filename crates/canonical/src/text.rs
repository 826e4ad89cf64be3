use std::fmt;

use serde::Serialize;

/// Sanitized source text.
///
/// Produced only by [`Sanitizer::sanitize`](crate::Sanitizer::sanitize) and
/// never mutated afterwards. Lengths are measured in Unicode scalar values,
/// which is the unit k-grams are cut in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SanitizedText {
    text: String,
    #[serde(skip)]
    char_len: usize,
}

impl SanitizedText {
    pub(crate) fn new(text: String) -> Self {
        let char_len = text.chars().count();
        Self { text, char_len }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of chars (not bytes).
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl AsRef<str> for SanitizedText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for SanitizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
