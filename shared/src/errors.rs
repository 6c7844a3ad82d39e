//! Shared error types for the measurement system

use thiserror::Error;

/// Request validation failures, surfaced to callers as client errors
///
/// These are never retried and never trigger provider fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("image reference list is empty")]
    EmptyInput,

    #[error("image reference {index} is neither an absolute URL nor a data URI: {reference}")]
    MalformedReference { index: usize, reference: String },
}
