//! Environment-sourced vision tier configuration

use shared::ProviderId;

/// Immutable process configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct VisionConfig {
    /// Primary provider selection; the synthetic generator is always the
    /// fallback regardless of this choice
    pub provider: ProviderId,
    pub groq_api_key: Option<String>,
    pub openai_api_key: Option<String>,
}

impl VisionConfig {
    /// Read configuration from the environment.
    ///
    /// A missing credential is not an error here; it surfaces as
    /// `AuthMissing` on the first provider invocation and triggers
    /// fallback.
    pub fn from_env() -> Self {
        let provider = match std::env::var("VISION_PROVIDER") {
            Ok(value) => match ProviderId::from_str(&value) {
                Some(provider) => provider,
                None => {
                    tracing::warn!(provider = %value, "unrecognized VISION_PROVIDER, using mock");
                    ProviderId::Mock
                }
            },
            Err(_) => ProviderId::Mock,
        };

        Self {
            provider,
            groq_api_key: non_empty_env("GROQ_API_KEY"),
            openai_api_key: non_empty_env("OPENAI_API_KEY"),
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
