//! # codefp matcher (`matcher`)
//!
//! Scores submitted source code against a fixed reference corpus and flags
//! near-copies.
//!
//! ## Core Types
//!
//! - [`FingerprintEngine`]: sanitize → k-grams → hashes → winnow, the one
//!   pipeline used for both corpus entries and submissions.
//! - [`jaccard`]: similarity of two fingerprints, `0.0` when either is empty.
//! - [`Corpus`]: ordered, immutable reference entries with precomputed
//!   fingerprints. Built once at startup.
//! - [`Matcher`]: finds the best-scoring entry for a submission and applies
//!   the flag threshold (exclusive, `0.85` by default).
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{builtin_references, Matcher};
//!
//! let matcher = Matcher::with_defaults(builtin_references()).unwrap();
//! let submission = "const factorial = (n) => {
//!     if (n === 0 || n === 1) return 1;
//!     return n * factorial(n - 1);
//! }";
//!
//! let result = matcher.match_submission(submission);
//! assert!(result.is_flagged);
//! assert_eq!(result.matched_name(), Some("Factorial Recursive"));
//! ```
//!
//! ## Observability
//!
//! Install a [`MatchMetrics`] implementation via [`set_match_metrics`] to
//! record per-submission latency and outcome. Corpus construction and each
//! match also emit `tracing` events.

pub mod corpus;
pub mod engine;
pub mod metrics;
pub mod pipeline;
pub mod similarity;
pub mod types;

pub use crate::corpus::{builtin_references, Corpus, ReferenceEntry, ReferenceSource};
pub use crate::engine::Matcher;
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::pipeline::FingerprintEngine;
pub use crate::similarity::jaccard;
pub use crate::types::{score_percent, MatchConfig, MatchError, MatchResult};
