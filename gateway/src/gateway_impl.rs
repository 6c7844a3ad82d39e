//! Main gateway implementation
//!
//! Client-facing HTTP tier: accepts analysis requests by URL or upload,
//! normalizes uploads into data-URI references, and forwards to the vision
//! tier. The gateway never retries a downstream call.

use axum::{
    extract::{Multipart, State},
    http::{HeaderValue, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use shared::{validate_image_refs, AnalysisRequest, ProductAnalysisResponse, ValidationError};

use crate::config::GatewayConfig;
use crate::error::{GatewayError, GatewayResult};
use crate::traits::VisionClient;

/// Main gateway struct with dependency injection
pub struct Gateway<V>
where
    V: VisionClient,
{
    bind_address: SocketAddr,
    cors_origins: Vec<String>,
    vision_client: Arc<V>,
}

impl<V> Gateway<V>
where
    V: VisionClient + 'static,
{
    pub fn new(bind_address: SocketAddr, config: &GatewayConfig, vision_client: V) -> Self {
        Self {
            bind_address,
            cors_origins: config.cors_origins.clone(),
            vision_client: Arc::new(vision_client),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/", get(root_handler))
            .route("/api/v1/analyze-product", post(analyze_product_handler::<V>))
            .route("/api/v1/analyze/upload", post(analyze_upload_handler::<V>))
            .layer(
                ServiceBuilder::new()
                    .layer(cors_layer(&self.cors_origins))
                    .into_inner(),
            )
            .with_state(self.vision_client.clone())
    }

    /// Start the HTTP server
    pub async fn run(&self) -> GatewayResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(self.bind_address)
            .await
            .map_err(|e| {
                GatewayError::ServerStartup(format!("failed to bind {}: {e}", self.bind_address))
            })?;

        tracing::info!("🌐 Gateway listening on http://{}", self.bind_address);

        axum::serve(listener, router)
            .await
            .map_err(|e| GatewayError::ServerStartup(e.to_string()))?;

        Ok(())
    }
}

/// CORS from the configured origin list; "*" means permissive
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Gateway Service Online" }))
}

/// Analyze products referenced by URL
async fn analyze_product_handler<V>(
    State(vision_client): State<Arc<V>>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<ProductAnalysisResponse>, (StatusCode, Json<Value>)>
where
    V: VisionClient,
{
    if let Err(error) = validate_image_refs(&request.image_refs) {
        return Err(validation_response(error));
    }

    forward(vision_client.as_ref(), &request).await
}

/// Analyze uploaded product images
///
/// Each uploaded file becomes a `data:<content-type>;base64,<payload>`
/// reference, preserving file order. A text part named `product_id` is
/// carried through to the response.
async fn analyze_upload_handler<V>(
    State(vision_client): State<Arc<V>>,
    mut multipart: Multipart,
) -> Result<Json<ProductAnalysisResponse>, (StatusCode, Json<Value>)>
where
    V: VisionClient,
{
    let mut image_refs = Vec::new();
    let mut product_id = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(bad_request(format!("invalid multipart body: {e}"))),
        };

        if field.file_name().is_some() {
            let content_type = field
                .content_type()
                .map(|ct| ct.to_string())
                .unwrap_or_else(|| "image/jpeg".to_string());
            let bytes = field
                .bytes()
                .await
                .map_err(|e| bad_request(format!("failed to read upload: {e}")))?;
            image_refs.push(to_data_uri(&content_type, &bytes));
        } else if field.name() == Some("product_id") {
            let value = field.text().await.unwrap_or_default();
            if !value.is_empty() {
                product_id = Some(value);
            }
        }
    }

    if image_refs.is_empty() {
        return Err(bad_request("no files uploaded".to_string()));
    }

    let request = AnalysisRequest {
        image_refs,
        product_id,
    };
    forward(vision_client.as_ref(), &request).await
}

async fn forward<V>(
    vision_client: &V,
    request: &AnalysisRequest,
) -> Result<Json<ProductAnalysisResponse>, (StatusCode, Json<Value>)>
where
    V: VisionClient,
{
    match vision_client.process(request).await {
        Ok(response) => Ok(Json(response)),
        Err(error) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": error.to_string() })),
        )),
    }
}

fn validation_response(error: ValidationError) -> (StatusCode, Json<Value>) {
    let status = match error {
        ValidationError::EmptyInput => StatusCode::BAD_REQUEST,
        ValidationError::MalformedReference { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    };
    (status, Json(json!({ "detail": error.to_string() })))
}

fn bad_request(detail: String) -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "detail": detail })))
}

fn to_data_uri(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", content_type, BASE64.encode(bytes))
}
