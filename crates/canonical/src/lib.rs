//! codefp canonical layer.
//!
//! Turns raw submitted source code into the sanitized character stream that
//! every downstream stage (k-grams, hashing, winnowing) operates on.
//!
//! ## What we do
//!
//! - Strip `//` line comments (through end of line)
//! - Strip `/* ... */` block comments (shortest match, may span lines)
//! - Remove every whitespace character
//! - Lowercase what is left
//!
//! The stages always run in that order. A `//` that sits inside a block
//! comment is therefore removed first, together with the rest of its line.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. Same text and config give
//! the same [`SanitizedText`] on any machine. There is no error path for
//! input text: empty input yields empty output.
//!
//! ```
//! use canonical::sanitize;
//!
//! let a = sanitize("function f(){return 1;}");
//! let b = sanitize("FUNCTION F ( ) { // note\n RETURN 1 ; }");
//! assert_eq!(a, b);
//! assert_eq!(a.as_str(), "functionf(){return1;}");
//! ```

mod comments;
mod config;
mod error;
mod sanitize;
mod text;
mod whitespace;

pub use crate::comments::strip_comments;
pub use crate::config::SanitizeConfig;
pub use crate::error::CanonicalError;
pub use crate::sanitize::{sanitize, Sanitizer};
pub use crate::text::SanitizedText;
pub use crate::whitespace::strip_whitespace;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_and_comments_do_not_matter() {
        let compact = "function f(){return 1;}";
        let noisy = "FUNCTION F ( ) { // note\n RETURN 1 ; }";
        assert_eq!(sanitize(compact), sanitize(noisy));
    }

    #[test]
    fn block_comments_span_lines() {
        let input = "let a = 1; /* multi\n line\n comment */ let b = 2;";
        assert_eq!(sanitize(input).as_str(), "leta=1;letb=2;");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let out = sanitize("");
        assert!(out.is_empty());
        assert_eq!(out.char_len(), 0);
    }

    #[test]
    fn whitespace_only_input_yields_empty_output() {
        assert!(sanitize(" \t\r\n  \u{00A0}").is_empty());
    }

    #[test]
    fn comments_only_input_yields_empty_output() {
        assert!(sanitize("// one\n/* two */\n// three").is_empty());
    }

    #[test]
    fn sanitize_is_deterministic() {
        let input = "const factorial = (n) => { if (n === 0) return 1; }";
        assert_eq!(sanitize(input), sanitize(input));
    }
}
