//! Provider identifiers and failure kinds shared across tiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for analysis providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderId {
    Mock,
    Groq,
    OpenAi,
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ProviderId {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mock" => Some(ProviderId::Mock),
            "groq" => Some(ProviderId::Groq),
            "openai" => Some(ProviderId::OpenAi),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Mock => "mock",
            ProviderId::Groq => "groq",
            ProviderId::OpenAi => "openai",
        }
    }
}

/// Failure kinds for a single provider invocation
///
/// The fallback engine pattern-matches on these; none of them reach a
/// caller directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderFailure {
    /// Credential was not configured for the selected provider
    AuthMissing,
    /// Network/connection error, including non-success statuses
    TransportFailure(String),
    /// Request exceeded the provider deadline
    Timeout,
    /// Reply envelope could not be decoded or carried no content
    MalformedResponse(String),
    /// Content failed strict JSON parsing or the schema bounds check
    SchemaViolation(String),
}
