//! Provider trait definitions for dependency injection

use async_trait::async_trait;

use shared::{ProductAnalysisResponse, ProviderFailure};

/// A capability that turns image references into a `ProductAnalysisResponse`
///
/// Implementations make at most one attempt per call; retry policy belongs
/// to the engine, not the provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Stable provider name for logs and selection
    fn name(&self) -> &'static str;

    /// Analyze the ordered reference list in a single attempt
    async fn analyze(
        &self,
        image_refs: &[String],
    ) -> Result<ProductAnalysisResponse, ProviderFailure>;
}
