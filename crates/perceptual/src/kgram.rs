//! K-gram generation.
//!
//! A text of `L` chars yields `max(0, L - k + 1)` overlapping k-grams in
//! left-to-right order. Repeated k-grams are kept; deduplication happens
//! after winnowing. K-grams borrow from the input.

/// Slice `text` into overlapping windows of `k` chars.
///
/// ```rust
/// use perceptual::kgrams;
///
/// assert_eq!(kgrams("abcd", 2), vec!["ab", "bc", "cd"]);
/// assert!(kgrams("abc", 4).is_empty());
/// ```
pub fn kgrams(text: &str, k: usize) -> Vec<&str> {
    if k == 0 {
        return Vec::new();
    }

    // Byte windows are char windows for ASCII input.
    if text.is_ascii() {
        let n = text.len();
        if n < k {
            return Vec::new();
        }
        return (0..=n - k).map(|i| &text[i..i + k]).collect();
    }

    let mut bounds: Vec<usize> = Vec::with_capacity(text.len() + 1);
    bounds.extend(text.char_indices().map(|(idx, _)| idx));
    bounds.push(text.len());

    let n = bounds.len() - 1;
    if n < k {
        return Vec::new();
    }
    (0..=n - k)
        .map(|i| &text[bounds[i]..bounds[i + k]])
        .collect()
}

/// Number of k-grams a text of `char_len` chars produces.
pub fn kgram_count(char_len: usize, k: usize) -> usize {
    if k == 0 || char_len < k {
        0
    } else {
        char_len - k + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text() {
        assert!(kgrams("", 3).is_empty());
    }

    #[test]
    fn k_zero() {
        assert!(kgrams("abc", 0).is_empty());
    }

    #[test]
    fn shorter_than_k() {
        assert!(kgrams("ab", 3).is_empty());
    }

    #[test]
    fn exact_k() {
        assert_eq!(kgrams("abc", 3), vec!["abc"]);
    }

    #[test]
    fn produces_correct_count() {
        let text = "abcdefghijklmnopqrstuvwxyz";
        let grams = kgrams(text, 20);
        assert_eq!(grams.len(), kgram_count(text.len(), 20));
        assert_eq!(grams.len(), 7);
        assert_eq!(grams[0], "abcdefghijklmnopqrst");
        assert_eq!(grams[6], "ghijklmnopqrstuvwxyz");
    }

    #[test]
    fn duplicates_are_kept() {
        assert_eq!(kgrams("aaaa", 2), vec!["aa", "aa", "aa"]);
    }

    #[test]
    fn multibyte_chars_are_single_units() {
        let text = "\u{00E9}a\u{1F600}b";
        assert_eq!(kgrams(text, 2), vec!["\u{00E9}a", "a\u{1F600}", "\u{1F600}b"]);
        assert_eq!(kgram_count(4, 2), 3);
    }

    #[test]
    fn ascii_and_generic_paths_agree() {
        // Same char structure; the trailing é forces the generic path.
        let ascii = "function(x){return x}";
        let grams_ascii = kgrams(ascii, 5);
        let mixed = format!("{ascii}\u{00E9}");
        let grams_mixed = kgrams(&mixed, 5);
        assert_eq!(grams_mixed.len(), grams_ascii.len() + 1);
        assert_eq!(&grams_mixed[..grams_ascii.len()], &grams_ascii[..]);
    }

    #[test]
    fn kgram_count_boundaries() {
        assert_eq!(kgram_count(19, 20), 0);
        assert_eq!(kgram_count(20, 20), 1);
        assert_eq!(kgram_count(29, 20), 10);
        assert_eq!(kgram_count(5, 0), 0);
    }
}
