//! Gateway error types

use thiserror::Error;

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Gateway error types
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Vision Service Error: {message}")]
    VisionComm { message: String },

    #[error("configuration error: {message}")]
    ConfigError { message: String },

    #[error("server startup error: {0}")]
    ServerStartup(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
