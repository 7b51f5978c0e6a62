use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use super::request::OcrRequest;
use crate::core::OcrEngine;
use crate::domain::model::CardRecord;
use crate::domain::ports::OcrProvider;
use crate::utils::error::OcrError;

pub struct AppState<P: OcrProvider> {
    engine: Arc<OcrEngine<P>>,
}

impl<P: OcrProvider> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

/// Builds the application router around a ready engine.
pub fn router<P: OcrProvider + 'static>(engine: OcrEngine<P>) -> Router {
    let state = AppState {
        engine: Arc::new(engine),
    };

    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Card OCR endpoint
        .route("/ocr", post(ocr_handler::<P>))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn start_server<P: OcrProvider + 'static>(
    engine: OcrEngine<P>,
    host: &str,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(engine);

    let addr = format!("{}:{}", host, port).parse::<SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// POST /ocr - Extract card fields from an image
///
/// Accepts an image URI, runs it through the OCR backend and returns the
/// parsed card record. Fields whose labels were not found come back as null.
///
/// # Errors
/// - 400 Bad Request: missing or malformed `imageUri`
/// - 502 Bad Gateway: OCR backend unreachable or returned garbage
async fn ocr_handler<P: OcrProvider + 'static>(
    State(state): State<AppState<P>>,
    Json(request): Json<OcrRequest>,
) -> Result<Json<CardRecord>, (StatusCode, String)> {
    if let Err(e) = request.validate() {
        warn!("OCR request validation failed: {}", e);
        return Err((StatusCode::BAD_REQUEST, e.to_string()));
    }

    let image_uri = request.image_uri.as_deref().unwrap_or_default();

    let record = state.engine.process(image_uri).await.map_err(|e| {
        warn!("OCR processing failed: {}", e);
        (status_for(&e), e.to_string())
    })?;

    Ok(Json(record))
}

fn status_for(error: &OcrError) -> StatusCode {
    match error {
        OcrError::ValidationError { .. } => StatusCode::BAD_REQUEST,
        OcrError::ApiError(_) | OcrError::UpstreamError { .. } | OcrError::SerializationError(_) => {
            StatusCode::BAD_GATEWAY
        }
        OcrError::ConfigError { .. } | OcrError::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
