use thiserror::Error;

/// Errors that can occur while building a [`Sanitizer`](crate::Sanitizer).
///
/// Sanitizing text itself never fails; only configuration is validated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
