//! Tests for the remote provider adapters

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::services::{GroqProvider, OpenAiProvider};
use crate::traits::AnalysisProvider;
use shared::ProviderFailure;

fn refs() -> Vec<String> {
    vec!["http://x/a.jpg".to_string()]
}

fn valid_content() -> serde_json::Value {
    json!({
        "continuous_dimensions": {
            "gender_expression": 1.5,
            "visual_weight": -2.0,
            "embellishment": 0.0,
            "unconventionality": 3.5,
            "formality": -1.0
        },
        "discrete_attributes": {
            "has_wirecore": false,
            "is_transparent": true,
            "dominant_colors": ["Black", "Gold"],
            "frame_shape": "Round",
            "texture_pattern": "Matte",
            "looks_like_kids_product": false
        },
        "metadata": {
            "image_quality_notes": "Sharp, well lit",
            "is_occluded_or_ambiguous": false,
            "confidence_score": 0.85
        }
    })
}

/// Chat-completions reply envelope with the given text content
fn chat_reply(content: &str) -> serde_json::Value {
    json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    })
}

fn mounted_provider(server: &MockServer) -> GroqProvider {
    GroqProvider::new(Some("test-key".to_string()))
        .with_base_url(format!("{}/chat/completions", server.uri()))
}

#[tokio::test]
async fn test_missing_key_fails_before_network() {
    let provider = GroqProvider::new(None);
    let result = provider.analyze(&refs()).await;

    assert!(matches!(result, Err(ProviderFailure::AuthMissing)));
}

#[tokio::test]
async fn test_openai_missing_key_fails_before_network() {
    let provider = OpenAiProvider::new(None);
    let result = provider.analyze(&refs()).await;

    assert!(matches!(result, Err(ProviderFailure::AuthMissing)));
}

#[tokio::test]
async fn test_successful_reply_parses_into_schema() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(chat_reply(&valid_content().to_string())),
        )
        .mount(&server)
        .await;

    let provider = mounted_provider(&server);
    let response = provider.analyze(&refs()).await.unwrap();

    assert_eq!(response.discrete_attributes.frame_shape, "Round");
    assert!((response.metadata.confidence_score - 0.85).abs() < 1e-9);
}

#[tokio::test]
async fn test_unauthorized_status_is_auth_missing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let provider = mounted_provider(&server);
    let result = provider.analyze(&refs()).await;

    assert!(matches!(result, Err(ProviderFailure::AuthMissing)));
}

#[tokio::test]
async fn test_server_error_is_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let provider = mounted_provider(&server);
    let result = provider.analyze(&refs()).await;

    assert!(matches!(result, Err(ProviderFailure::TransportFailure(_))));
}

#[tokio::test]
async fn test_missing_content_is_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let provider = mounted_provider(&server);
    let result = provider.analyze(&refs()).await;

    assert!(matches!(result, Err(ProviderFailure::MalformedResponse(_))));
}

#[tokio::test]
async fn test_non_json_content_is_schema_violation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_reply("I cannot analyze these images.")),
        )
        .mount(&server)
        .await;

    let provider = mounted_provider(&server);
    let result = provider.analyze(&refs()).await;

    assert!(matches!(result, Err(ProviderFailure::SchemaViolation(_))));
}

#[tokio::test]
async fn test_out_of_range_content_is_schema_violation() {
    let mut content = valid_content();
    content["continuous_dimensions"]["gender_expression"] = json!(9.0);

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply(&content.to_string())))
        .mount(&server)
        .await;

    let provider = mounted_provider(&server);
    let result = provider.analyze(&refs()).await;

    assert!(matches!(result, Err(ProviderFailure::SchemaViolation(_))));
}
