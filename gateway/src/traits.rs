//! Gateway trait definitions for dependency injection

use async_trait::async_trait;

use shared::{AnalysisRequest, ProductAnalysisResponse};

use crate::error::GatewayResult;

/// Client for the downstream vision tier
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisionClient: Send + Sync {
    /// Forward an analysis request and return the analyzed response
    async fn process(&self, request: &AnalysisRequest) -> GatewayResult<ProductAnalysisResponse>;
}
