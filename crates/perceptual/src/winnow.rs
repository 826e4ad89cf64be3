//! Winnowing.
//!
//! The fingerprint is the set of per-window minima over every window of `w`
//! consecutive hashes. Only the minimum **value** is kept: which position
//! produced it is irrelevant once the values land in a set, so there is no
//! rightmost-tie rule and no position tracking. Fewer than `w` hashes means
//! zero windows and an empty fingerprint.

use std::collections::VecDeque;

use crate::fingerprint::Fingerprint;
use crate::hasher::HashValue;

/// Winnowing via monotonic deque, O(n).
///
/// ```rust
/// use perceptual::winnow;
///
/// let fp = winnow(&[100, 50, 200, 75, 25], 2);
/// // windows: [100,50] [50,200] [200,75] [75,25]
/// assert_eq!(fp.iter().copied().collect::<Vec<_>>(), vec![25, 50, 75]);
/// ```
pub fn winnow(hashes: &[HashValue], w: usize) -> Fingerprint {
    let n = hashes.len();
    let mut out = Fingerprint::new();
    if w == 0 || n < w {
        return out;
    }

    // Indices of the current window whose values increase front to back;
    // the front always holds a minimum.
    let mut dq: VecDeque<usize> = VecDeque::with_capacity(w);

    for (i, &val) in hashes.iter().enumerate() {
        while let Some(&j) = dq.back() {
            if hashes[j] >= val {
                dq.pop_back();
            } else {
                break;
            }
        }
        dq.push_back(i);

        while let Some(&j) = dq.front() {
            if j + w <= i {
                dq.pop_front();
            } else {
                break;
            }
        }

        if i + 1 >= w {
            if let Some(&min_idx) = dq.front() {
                out.insert(hashes[min_idx]);
            }
        }
    }

    out
}
