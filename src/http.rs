//! HTTP transport for the analysis service
//!
//! Axum router exposing the analyze endpoint plus a health check.
//! Validation failures return 400 with a specific message; upstream
//! failures return 500 with a fixed generic message and the detail is
//! logged server-side only.

use crate::analysis::Analyzer;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Caller-visible message for any upstream failure.
pub const ANALYZE_FAILED_MESSAGE: &str = "Failed to analyze. Please try again.";

/// Shared state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

/// Inbound body for `POST /analyze`
///
/// All fields are optional at the wire level; presence is validated by the
/// dispatcher so that missing fields produce the contract's 400 message
/// rather than a deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeBody {
    #[serde(default)]
    pub feature: Option<String>,
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub secondary_input: Option<String>,
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/analyze", post(analyze_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Health check endpoint
async fn health_handler() -> impl IntoResponse {
    "ok"
}

/// Analyze endpoint
async fn analyze_handler(State(state): State<AppState>, Json(body): Json<AnalyzeBody>) -> Response {
    let outcome = state
        .analyzer
        .analyze(
            body.feature.as_deref(),
            body.input.as_deref(),
            body.secondary_input.as_deref(),
        )
        .await;

    match outcome {
        Ok(result) => (StatusCode::OK, Json(json!({ "result": result }))).into_response(),
        Err(err) if err.is_client_error() => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
        Err(err) => {
            log::error!("Analysis request failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": ANALYZE_FAILED_MESSAGE })),
            )
                .into_response()
        }
    }
}
