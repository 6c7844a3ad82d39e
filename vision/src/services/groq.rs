//! Groq remote analysis provider

use async_trait::async_trait;
use std::time::Duration;

use shared::{ProductAnalysisResponse, ProviderFailure};

use crate::core::prompt;
use crate::core::response::{classify_transport_error, parse_analysis};
use crate::traits::AnalysisProvider;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const GROQ_MODEL: &str = "llama-3.2-11b-vision-preview";

/// Deadline for the model call itself; the gateway's end-to-end deadline
/// is longer.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(45);

/// Remote provider backed by the Groq chat completions API
pub struct GroqProvider {
    api_key: Option<String>,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GroqProvider {
    /// Construction never fails; a missing credential surfaces as
    /// `AuthMissing` on the first analyze call, before any network use.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            model: GROQ_MODEL.to_string(),
            base_url: GROQ_API_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Override the endpoint, used by tests against a local server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl AnalysisProvider for GroqProvider {
    fn name(&self) -> &'static str {
        "groq"
    }

    async fn analyze(
        &self,
        image_refs: &[String],
    ) -> Result<ProductAnalysisResponse, ProviderFailure> {
        let api_key = self.api_key.as_ref().ok_or(ProviderFailure::AuthMissing)?;

        let request_body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": prompt::SYSTEM_PROMPT },
                { "role": "user", "content": prompt::build_user_content(image_refs) }
            ],
            "temperature": 0.1,
            "max_tokens": 1024,
            "response_format": { "type": "json_object" }
        });

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(classify_transport_error)?;

        if !response.status().is_success() {
            return match response.status().as_u16() {
                401 | 403 => Err(ProviderFailure::AuthMissing),
                status => Err(ProviderFailure::TransportFailure(format!("HTTP {status}"))),
            };
        }

        let reply: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderFailure::MalformedResponse(format!("undecodable reply: {e}")))?;

        let content = reply
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .ok_or_else(|| ProviderFailure::MalformedResponse("no content in reply".to_string()))?;

        parse_analysis(content)
    }
}
