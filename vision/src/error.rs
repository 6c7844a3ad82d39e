//! Vision tier error types

use shared::{ProviderFailure, ValidationError};
use thiserror::Error;

/// Result type for vision operations
pub type VisionResult<T> = Result<T, VisionError>;

/// Vision tier error types
#[derive(Error, Debug)]
pub enum VisionError {
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),

    // The synthetic fallback is total; if this ever fires it surfaces
    // as a 500, never a panic.
    #[error("fallback provider failed: {reason:?}")]
    FallbackFailed { reason: ProviderFailure },

    #[error("configuration error: {message}")]
    ConfigError { message: String },

    #[error("server startup error: {0}")]
    ServerStartup(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
