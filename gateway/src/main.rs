//! Gateway binary entry point

use clap::Parser;
use std::net::SocketAddr;

use gateway::{Gateway, GatewayConfig, GatewayError, GatewayResult, RealVisionClient};

#[derive(Parser, Debug)]
#[command(name = "gateway")]
#[command(about = "Client-facing gateway for product image analysis")]
struct Args {
    /// Port for the HTTP server
    #[arg(long, default_value = "8000")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> GatewayResult<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    shared::logging::init_tracing(Some(&args.log_level));

    let config = GatewayConfig::from_env();
    tracing::info!(vision_service_url = %config.vision_service_url, "🌐 Gateway starting");

    let bind_address: SocketAddr = format!("127.0.0.1:{}", args.port)
        .parse()
        .map_err(|e| GatewayError::ConfigError {
            message: format!("invalid port: {e}"),
        })?;

    let vision_client = RealVisionClient::new(config.vision_service_url.clone());
    let gateway = Gateway::new(bind_address, &config, vision_client);
    gateway.run().await
}
