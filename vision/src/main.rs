//! Vision tier binary entry point

use clap::Parser;
use std::net::SocketAddr;

use shared::ProviderId;
use vision::{AnalysisEngine, VisionConfig, VisionError, VisionResult, VisionServer};

#[derive(Parser, Debug)]
#[command(name = "vision")]
#[command(about = "Vision analysis service with provider fallback")]
struct Args {
    /// Port for the internal HTTP server
    #[arg(long, default_value = "8001")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> VisionResult<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    shared::logging::init_tracing(Some(&args.log_level));

    let config = VisionConfig::from_env();
    tracing::info!(provider = config.provider.as_str(), "🔬 Vision service starting");

    if config.provider == ProviderId::Groq && config.groq_api_key.is_none() {
        tracing::warn!("GROQ_API_KEY not set; analysis will fall back to the synthetic generator");
    }
    if config.provider == ProviderId::OpenAi && config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not set; analysis will fall back to the synthetic generator");
    }

    let bind_address: SocketAddr = format!("127.0.0.1:{}", args.port)
        .parse()
        .map_err(|e| VisionError::ConfigError {
            message: format!("invalid port: {e}"),
        })?;

    let engine = AnalysisEngine::from_config(&config);
    let server = VisionServer::new(bind_address, engine);
    server.run().await
}
