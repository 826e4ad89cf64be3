//! Whitespace removal.
//!
//! Unlike prose normalization, source fingerprinting drops whitespace
//! entirely instead of collapsing it, so `a = b` and `a=b` compare equal.
//! Whitespace here is the ECMAScript `\s` set: Unicode `White_Space` minus
//! U+0085 (NEL), plus U+FEFF (byte order mark).

#[inline]
fn is_stripped_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}'
}

/// Remove every whitespace character from `text`.
///
/// ```rust
/// use canonical::strip_whitespace;
///
/// assert_eq!(strip_whitespace("  let  x =\t1;\n"), "letx=1;");
/// assert_eq!(strip_whitespace(""), "");
/// ```
pub fn strip_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    out.extend(text.chars().filter(|&c| !is_stripped_whitespace(c)));
    out
}
