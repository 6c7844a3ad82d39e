//! Environment-sourced gateway configuration

/// Immutable process configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the vision tier
    pub vision_service_url: String,
    /// Allowed cross-origin hosts; "*" means any
    pub cors_origins: Vec<String>,
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        let vision_service_url = std::env::var("VISION_SERVICE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8001".to_string());

        let cors_origins = std::env::var("CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        let cors_origins = if cors_origins.is_empty() {
            vec!["*".to_string()]
        } else {
            cors_origins
        };

        Self {
            vision_service_url,
            cors_origins,
        }
    }
}
