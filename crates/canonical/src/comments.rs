//! Comment stripping.
//!
//! Line comments run from `//` up to, but not including, the next line
//! terminator (`\n`, `\r`, U+2028, U+2029) or end of input. Block comments
//! are the shortest `/* ... */` span and may cross lines; an unterminated
//! `/*` is left untouched.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static LINE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"//[^\n\r\x{2028}\x{2029}]*").expect("valid line comment regex"));

static BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid block comment regex"));

pub(crate) fn strip_line_comments(text: &str) -> Cow<'_, str> {
    LINE_COMMENT.replace_all(text, "")
}

pub(crate) fn strip_block_comments(text: &str) -> Cow<'_, str> {
    BLOCK_COMMENT.replace_all(text, "")
}

/// Remove line comments, then block comments.
///
/// Borrows the input when nothing was removed.
///
/// ```rust
/// use canonical::strip_comments;
///
/// assert_eq!(strip_comments("a // b\nc"), "a \nc");
/// assert_eq!(strip_comments("a /* b\n */c"), "a c");
/// assert_eq!(strip_comments("plain"), "plain");
/// ```
pub fn strip_comments(text: &str) -> Cow<'_, str> {
    match strip_line_comments(text) {
        Cow::Borrowed(rest) => strip_block_comments(rest),
        Cow::Owned(rest) => Cow::Owned(strip_block_comments(&rest).into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_comment_stops_at_newline() {
        assert_eq!(strip_line_comments("x = 1; // set x\ny = 2;"), "x = 1; \ny = 2;");
    }

    #[test]
    fn line_comment_stops_at_carriage_return() {
        assert_eq!(strip_line_comments("a// c\r\nb"), "a\r\nb");
    }

    #[test]
    fn line_comment_at_end_of_input() {
        assert_eq!(strip_line_comments("return x; // done"), "return x; ");
    }

    #[test]
    fn block_comment_is_non_greedy() {
        assert_eq!(strip_block_comments("a/*1*/b/*2*/c"), "abc");
    }

    #[test]
    fn unterminated_block_comment_is_kept() {
        assert_eq!(strip_block_comments("a /* open"), "a /* open");
    }

    #[test]
    fn line_comments_run_before_block_comments() {
        // The `//` removes the closing `*/`, so the block comment extends to
        // the next terminator further down.
        let input = "a /* x // y */ b\nc */ d";
        assert_eq!(strip_comments(input), "a  d");
    }

    #[test]
    fn borrows_when_nothing_to_strip() {
        assert!(matches!(strip_comments("no comments"), Cow::Borrowed(_)));
    }
}
