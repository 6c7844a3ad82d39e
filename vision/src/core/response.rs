//! Strict handling of remote model replies

use shared::{ProductAnalysisResponse, ProviderFailure};

/// Parse model text strictly as JSON and check the schema bounds.
///
/// Malformed JSON and schema-valid-but-out-of-bounds replies are treated
/// identically; no partial recovery is attempted.
pub fn parse_analysis(content: &str) -> Result<ProductAnalysisResponse, ProviderFailure> {
    let response: ProductAnalysisResponse = serde_json::from_str(content)
        .map_err(|e| ProviderFailure::SchemaViolation(format!("invalid JSON content: {e}")))?;

    response.validate().map_err(ProviderFailure::SchemaViolation)?;

    Ok(response)
}

/// Map a transport-level error onto a provider failure kind
pub fn classify_transport_error(error: reqwest::Error) -> ProviderFailure {
    if error.is_timeout() {
        ProviderFailure::Timeout
    } else {
        ProviderFailure::TransportFailure(error.to_string())
    }
}
