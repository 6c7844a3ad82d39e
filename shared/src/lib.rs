//! Shared contracts for the visual product measurement system
//!
//! Contains only the types both tiers speak: the analysis request/response
//! schema, provider identifiers and failure kinds, reference validation,
//! and tracing setup. Tier-internal types are kept in their respective
//! crates.

pub mod errors;
pub mod logging;
pub mod schema;
pub mod types;
pub mod validate;

pub use errors::ValidationError;
pub use schema::{
    AnalysisRequest, ContinuousDimensions, DiscreteAttributes, ProductAnalysisResponse,
    VisualMetadata, FRAME_SHAPES,
};
pub use types::{ProviderFailure, ProviderId};
pub use validate::validate_image_refs;
