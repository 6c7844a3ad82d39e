//! Tests for provider selection

use crate::config::VisionConfig;
use crate::services::select_provider;
use crate::traits::AnalysisProvider;
use shared::ProviderId;

fn config(provider: ProviderId) -> VisionConfig {
    VisionConfig {
        provider,
        groq_api_key: None,
        openai_api_key: None,
    }
}

#[test]
fn test_mock_config_selects_synthetic() {
    assert_eq!(select_provider(&config(ProviderId::Mock)).name(), "mock");
}

#[test]
fn test_groq_config_selects_groq() {
    assert_eq!(select_provider(&config(ProviderId::Groq)).name(), "groq");
}

#[test]
fn test_openai_config_selects_openai() {
    assert_eq!(select_provider(&config(ProviderId::OpenAi)).name(), "openai");
}
