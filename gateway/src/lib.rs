//! Gateway tier for the visual product measurement system
//!
//! Client-facing HTTP surface: JSON analyze endpoint, multipart upload
//! normalization into data-URI references, CORS, and forwarding to the
//! vision tier.

pub mod config;
pub mod error;
pub mod gateway_impl;
pub mod services;
pub mod traits;

// Re-export main types
pub use config::GatewayConfig;
pub use error::{GatewayError, GatewayResult};
pub use gateway_impl::Gateway;
pub use traits::VisionClient;

// Re-export service implementations
pub use services::RealVisionClient;
