//! Vision tier HTTP server
//!
//! Internal surface consumed by the gateway: one analysis endpoint plus a
//! liveness probe.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;

use shared::{AnalysisRequest, ProductAnalysisResponse, ValidationError};

use crate::engine::AnalysisEngine;
use crate::error::{VisionError, VisionResult};

pub struct VisionServer {
    bind_address: SocketAddr,
    engine: Arc<AnalysisEngine>,
}

impl VisionServer {
    pub fn new(bind_address: SocketAddr, engine: AnalysisEngine) -> Self {
        Self {
            bind_address,
            engine: Arc::new(engine),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/process", post(process_handler))
            .route("/health", get(health_handler))
            .with_state(self.engine.clone())
    }

    /// Start the HTTP server
    pub async fn run(&self) -> VisionResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(self.bind_address)
            .await
            .map_err(|e| {
                VisionError::ServerStartup(format!("failed to bind {}: {e}", self.bind_address))
            })?;

        tracing::info!("🔬 Vision service listening on http://{}", self.bind_address);

        axum::serve(listener, router)
            .await
            .map_err(|e| VisionError::ServerStartup(e.to_string()))?;

        Ok(())
    }
}

async fn process_handler(
    State(engine): State<Arc<AnalysisEngine>>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<ProductAnalysisResponse>, (StatusCode, Json<Value>)> {
    match engine.analyze(&request).await {
        Ok(response) => Ok(Json(response)),
        Err(error) => Err(error_response(error)),
    }
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok", "service": "vision" }))
}

/// Map engine errors onto client/server statuses with a detail body.
/// Provider failures never reach here; the engine absorbs them.
fn error_response(error: VisionError) -> (StatusCode, Json<Value>) {
    let status = match &error {
        VisionError::Validation(ValidationError::EmptyInput) => StatusCode::BAD_REQUEST,
        VisionError::Validation(ValidationError::MalformedReference { .. }) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(json!({ "detail": error.to_string() })))
}
