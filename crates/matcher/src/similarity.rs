//! Jaccard similarity between fingerprints.

use perceptual::Fingerprint;

/// `|A ∩ B| / |A ∪ B|`, or `0.0` when either side is empty.
///
/// Symmetric, and exactly `1.0` for two equal non-empty fingerprints.
///
/// ```rust
/// use matcher::jaccard;
/// use perceptual::Fingerprint;
///
/// let a: Fingerprint = [1, 2, 3, 4].into_iter().collect();
/// let b: Fingerprint = [3, 4, 5, 6].into_iter().collect();
/// assert_eq!(jaccard(&a, &b), 2.0 / 6.0);
/// assert_eq!(jaccard(&a, &Fingerprint::new()), 0.0);
/// ```
pub fn jaccard(a: &Fingerprint, b: &Fingerprint) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection_len(b);
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}
