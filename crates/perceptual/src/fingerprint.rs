use std::collections::btree_set;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::hasher::HashValue;

/// A winnowed fingerprint: the unordered set of selected hash values.
///
/// Backed by a `BTreeSet` so iteration and serialization are in ascending
/// order and therefore reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint {
    hashes: BTreeSet<HashValue>,
}

impl Fingerprint {
    /// The empty fingerprint.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    pub fn contains(&self, hash: HashValue) -> bool {
        self.hashes.contains(&hash)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, HashValue> {
        self.hashes.iter()
    }

    /// `|self ∩ other|`, walking the smaller set.
    pub fn intersection_len(&self, other: &Fingerprint) -> usize {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().filter(|h| large.hashes.contains(h)).count()
    }

    pub(crate) fn insert(&mut self, hash: HashValue) -> bool {
        self.hashes.insert(hash)
    }
}

impl FromIterator<HashValue> for Fingerprint {
    fn from_iter<I: IntoIterator<Item = HashValue>>(iter: I) -> Self {
        Self {
            hashes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Fingerprint {
    type Item = &'a HashValue;
    type IntoIter = btree_set::Iter<'a, HashValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.hashes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_iter_dedups() {
        let fp: Fingerprint = [3u32, 1, 3, 2, 1].into_iter().collect();
        assert_eq!(fp.len(), 3);
        assert_eq!(fp.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn intersection_is_symmetric() {
        let a: Fingerprint = [1u32, 2, 3, 4].into_iter().collect();
        let b: Fingerprint = [3u32, 4, 5].into_iter().collect();
        assert_eq!(a.intersection_len(&b), 2);
        assert_eq!(b.intersection_len(&a), 2);
    }

    #[test]
    fn empty_fingerprint() {
        let fp = Fingerprint::new();
        assert!(fp.is_empty());
        assert_eq!(fp.intersection_len(&[1u32].into_iter().collect()), 0);
    }

    #[test]
    fn serializes_as_sorted_array() {
        let fp: Fingerprint = [30u32, 10, 20].into_iter().collect();
        assert_eq!(serde_json::to_string(&fp).unwrap(), "[10,20,30]");
        let back: Fingerprint = serde_json::from_str("[20,10,30,10]").unwrap();
        assert_eq!(back, fp);
    }
}
