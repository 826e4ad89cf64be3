//! K-gram hashing.
//!
//! Each k-gram's UTF-8 bytes are digested and the first 4 digest bytes are
//! read big-endian into a `u32` (the same value as parsing the first 8 hex
//! characters of the digest). The digest is a fixed, documented choice:
//! fingerprints built with different digests never compare meaningfully.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::PerceptualConfig;

/// A truncated k-gram digest.
pub type HashValue = u32;

/// Digest used to hash k-grams.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    /// 128-bit MD5. Compatible with fingerprints produced by the reference
    /// service.
    #[default]
    Md5,
    /// 256-bit SHA-256.
    Sha256,
}

impl DigestAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "md5",
            DigestAlgorithm::Sha256 => "sha256",
        }
    }

    /// Digest `bytes` and keep the leading 32 bits.
    pub fn hash(&self, bytes: &[u8]) -> HashValue {
        match self {
            DigestAlgorithm::Md5 => leading_u32(&md5::compute(bytes).0),
            DigestAlgorithm::Sha256 => leading_u32(&Sha256::digest(bytes)),
        }
    }
}

#[inline]
fn leading_u32(digest: &[u8]) -> HashValue {
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// Hash a single k-gram.
///
/// ```rust
/// use perceptual::{hash_kgram, DigestAlgorithm};
///
/// // md5("abc") = 900150983cd24fb0d6963f7d28e17f72
/// assert_eq!(hash_kgram("abc", DigestAlgorithm::Md5), 0x9001_5098);
/// ```
pub fn hash_kgram(kgram: &str, digest: DigestAlgorithm) -> HashValue {
    digest.hash(kgram.as_bytes())
}

/// Hash every k-gram, preserving order.
pub fn hash_kgrams(kgrams: &[&str], cfg: &PerceptualConfig) -> Vec<HashValue> {
    let digest = cfg.digest;
    if cfg.use_parallel {
        kgrams
            .par_iter()
            .map(|g| hash_kgram(g, digest))
            .collect()
    } else {
        kgrams.iter().map(|g| hash_kgram(g, digest)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn md5_known_vectors() {
        // d41d8cd98f00b204e9800998ecf8427e
        assert_eq!(DigestAlgorithm::Md5.hash(b""), 0xd41d_8cd9);
        // 9e107d9d372bb6826bd81d3542a419d6
        assert_eq!(
            hash_kgram(
                "The quick brown fox jumps over the lazy dog",
                DigestAlgorithm::Md5
            ),
            0x9e10_7d9d
        );
    }

    #[test]
    fn sha256_known_vectors() {
        // ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad
        assert_eq!(hash_kgram("abc", DigestAlgorithm::Sha256), 0xba78_16bf);
        // e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855
        assert_eq!(DigestAlgorithm::Sha256.hash(b""), 0xe3b0_c442);
    }

    #[test]
    fn digests_differ() {
        assert_ne!(
            hash_kgram("functiontwosum(nums,", DigestAlgorithm::Md5),
            hash_kgram("functiontwosum(nums,", DigestAlgorithm::Sha256)
        );
    }

    #[test]
    fn hashes_utf8_bytes() {
        assert_eq!(
            hash_kgram("caf\u{00E9}", DigestAlgorithm::Md5),
            DigestAlgorithm::Md5.hash("caf\u{00E9}".as_bytes())
        );
    }

    #[test]
    fn parallel_equals_sequential() {
        let owned: Vec<String> = (0..500).map(|i| format!("kgram-{i:016}")).collect();
        let grams: Vec<&str> = owned.iter().map(String::as_str).collect();

        let seq = hash_kgrams(&grams, &PerceptualConfig::default());
        let par = hash_kgrams(&grams, &PerceptualConfig::default().with_parallel(true));
        assert_eq!(seq, par);
        assert_eq!(seq.len(), 500);
    }

    #[test]
    fn digest_names() {
        assert_eq!(DigestAlgorithm::Md5.name(), "md5");
        assert_eq!(DigestAlgorithm::Sha256.name(), "sha256");
        assert_eq!(
            serde_json::to_string(&DigestAlgorithm::Sha256).unwrap(),
            "\"sha256\""
        );
    }
}
