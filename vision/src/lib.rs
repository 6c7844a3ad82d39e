//! Vision analysis tier
//!
//! Provider abstraction, deterministic synthetic fallback, and the internal
//! HTTP surface the gateway forwards to.

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod services;
pub mod traits;
pub mod vision_impl;

// Re-export main types
pub use config::VisionConfig;
pub use engine::AnalysisEngine;
pub use error::{VisionError, VisionResult};
pub use traits::AnalysisProvider;
pub use vision_impl::VisionServer;

// Re-export service implementations
pub use services::{GroqProvider, OpenAiProvider, SyntheticProvider};
