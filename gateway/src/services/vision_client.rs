//! HTTP client for the vision tier

use async_trait::async_trait;
use std::time::Duration;

use shared::{AnalysisRequest, ProductAnalysisResponse};

use crate::error::{GatewayError, GatewayResult};
use crate::traits::VisionClient;

/// End-to-end deadline for a forwarded analysis call
const FORWARD_TIMEOUT: Duration = Duration::from_secs(60);

/// Real vision client forwarding requests over HTTP
pub struct RealVisionClient {
    base_url: String,
    client: reqwest::Client,
}

impl RealVisionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn process_url(&self) -> String {
        format!("{}/process", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl VisionClient for RealVisionClient {
    async fn process(&self, request: &AnalysisRequest) -> GatewayResult<ProductAnalysisResponse> {
        let response = self
            .client
            .post(self.process_url())
            .json(request)
            .timeout(FORWARD_TIMEOUT)
            .send()
            .await
            .map_err(|e| GatewayError::VisionComm {
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::VisionComm {
                message: format!("HTTP {status}: {detail}"),
            });
        }

        response
            .json::<ProductAnalysisResponse>()
            .await
            .map_err(|e| GatewayError::VisionComm {
                message: format!("undecodable response: {e}"),
            })
    }
}
