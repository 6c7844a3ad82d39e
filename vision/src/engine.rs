//! Fallback orchestration engine
//!
//! Drives one attempt at the selected primary provider and substitutes the
//! synthetic generator on any recognized provider failure. Single-shot,
//! two-provider chain: no retries on either link. The last link is a
//! provider that cannot fail, so every validated request terminates with a
//! response.

use shared::{validate_image_refs, AnalysisRequest, ProductAnalysisResponse};

use crate::config::VisionConfig;
use crate::error::{VisionError, VisionResult};
use crate::services::{select_provider, SyntheticProvider};
use crate::traits::AnalysisProvider;

pub struct AnalysisEngine {
    primary: Box<dyn AnalysisProvider>,
    fallback: SyntheticProvider,
}

impl AnalysisEngine {
    pub fn new(primary: Box<dyn AnalysisProvider>) -> Self {
        Self {
            primary,
            fallback: SyntheticProvider::new(),
        }
    }

    pub fn from_config(config: &VisionConfig) -> Self {
        Self::new(select_provider(config))
    }

    /// Run one request through validation, the primary attempt, and the
    /// fallback. The caller-supplied product id always wins over whatever
    /// the provider produced.
    pub async fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> VisionResult<ProductAnalysisResponse> {
        validate_image_refs(&request.image_refs)?;

        let mut response = match self.primary.analyze(&request.image_refs).await {
            Ok(response) => response,
            Err(failure) => {
                tracing::warn!(
                    provider = self.primary.name(),
                    ?failure,
                    "primary provider failed, using synthetic fallback"
                );
                self.fallback
                    .analyze(&request.image_refs)
                    .await
                    .map_err(|reason| VisionError::FallbackFailed { reason })?
            }
        };

        if let Some(product_id) = &request.product_id {
            response.product_id = Some(product_id.clone());
        }

        Ok(response)
    }
}
