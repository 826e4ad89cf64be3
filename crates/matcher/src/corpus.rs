//! The reference corpus.
//!
//! Built once, fingerprinted eagerly, and read-only afterwards. Share it
//! behind an `Arc`; concurrent readers need no locking.

use std::collections::HashSet;

use canonical::SanitizeConfig;
use perceptual::{Fingerprint, PerceptualConfig};
use serde::{Deserialize, Serialize};

use crate::pipeline::FingerprintEngine;
use crate::types::MatchError;

/// A reference document as supplied by the surrounding system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferenceSource {
    pub id: String,
    pub name: String,
    pub content: String,
}

impl ReferenceSource {
    pub fn new(id: impl Into<String>, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            content: content.into(),
        }
    }
}

/// A reference document with its precomputed fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceEntry {
    id: String,
    name: String,
    content: String,
    fingerprint: Fingerprint,
}

impl ReferenceEntry {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }
}

/// Ordered, immutable collection of reference entries.
///
/// Order is load order and decides ties during matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    entries: Vec<ReferenceEntry>,
    sanitize_cfg: SanitizeConfig,
    perceptual_cfg: PerceptualConfig,
}

impl Corpus {
    /// Fingerprint every source with `engine`, keeping their order.
    ///
    /// Ids must be non-empty and unique.
    pub fn build<I>(sources: I, engine: &FingerprintEngine) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = ReferenceSource>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut entries = Vec::new();

        for (position, source) in sources.into_iter().enumerate() {
            if source.id.trim().is_empty() {
                return Err(MatchError::EmptyReferenceId { position });
            }
            if !seen.insert(source.id.clone()) {
                return Err(MatchError::DuplicateReference(source.id));
            }

            let fingerprint = engine.fingerprint(&source.content);
            if fingerprint.is_empty() {
                tracing::warn!(
                    id = %source.id,
                    "reference content too short to fingerprint; it can never match"
                );
            }
            tracing::debug!(
                id = %source.id,
                name = %source.name,
                fingerprint_size = fingerprint.len(),
                "reference fingerprinted"
            );

            entries.push(ReferenceEntry {
                id: source.id,
                name: source.name,
                content: source.content,
                fingerprint,
            });
        }

        tracing::info!(entries = entries.len(), "reference corpus built");

        Ok(Self {
            entries,
            sanitize_cfg: engine.sanitize_config().clone(),
            perceptual_cfg: engine.perceptual_config().clone(),
        })
    }

    /// A corpus with no entries, fingerprinted under `engine`'s rules.
    pub fn empty(engine: &FingerprintEngine) -> Self {
        Self {
            entries: Vec::new(),
            sanitize_cfg: engine.sanitize_config().clone(),
            perceptual_cfg: engine.perceptual_config().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReferenceEntry> {
        self.entries.iter()
    }

    pub fn get(&self, id: &str) -> Option<&ReferenceEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Whether this corpus was fingerprinted under the same rules as `engine`.
    pub fn is_compatible_with(&self, engine: &FingerprintEngine) -> bool {
        &self.sanitize_cfg == engine.sanitize_config()
            && self
                .perceptual_cfg
                .produces_same_fingerprints(engine.perceptual_config())
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a ReferenceEntry;
    type IntoIter = std::slice::Iter<'a, ReferenceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// The demo reference set served when no corpus is configured.
pub fn builtin_references() -> Vec<ReferenceSource> {
    vec![
        ReferenceSource::new(
            "algo_001",
            "Two Sum (JavaScript)",
            r#"function twoSum(nums, target) {
    for (let i = 0; i < nums.length; i++) {
        for (let j = i + 1; j < nums.length; j++) {
            if (nums[i] + nums[j] === target) {
                return [i, j];
            }
        }
    }
}"#,
        ),
        ReferenceSource::new(
            "algo_002",
            "Factorial Recursive",
            r#"const factorial = (n) => {
    if (n === 0 || n === 1) return 1;
    return n * factorial(n - 1);
}"#,
        ),
        ReferenceSource::new(
            "algo_003",
            "Bubble Sort",
            r#"function bubbleSort(arr) {
    let len = arr.length;
    for (let i = 0; i < len; i++) {
        for (let j = 0; j < len - 1; j++) {
            if (arr[j] > arr[j + 1]) {
                let tmp = arr[j];
                arr[j] = arr[j + 1];
                arr[j + 1] = tmp;
            }
        }
    }
    return arr;
}"#,
        ),
    ]
}
