//! Provider selection from process configuration

use shared::ProviderId;

use crate::config::VisionConfig;
use crate::services::{GroqProvider, OpenAiProvider, SyntheticProvider};
use crate::traits::AnalysisProvider;

/// Map immutable configuration to a concrete provider instance.
///
/// Pure function of the config; nothing here reads the environment.
pub fn select_provider(config: &VisionConfig) -> Box<dyn AnalysisProvider> {
    match config.provider {
        ProviderId::Groq => Box::new(GroqProvider::new(config.groq_api_key.clone())),
        ProviderId::OpenAi => Box::new(OpenAiProvider::new(config.openai_api_key.clone())),
        ProviderId::Mock => Box::new(SyntheticProvider::new()),
    }
}
