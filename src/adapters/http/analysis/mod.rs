//! HTTP adapter for free-text analysis.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::adapters::http::quiz::ErrorResponse;
use crate::application::handlers::analysis::{RawAnalysisCommand, RawAnalysisHandler};

/// Request body for `POST /api/analysis/raw`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAnalysisRequest {
    pub text: String,
}

/// Response body for `POST /api/analysis/raw`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAnalysisResponse {
    pub analysis: String,
}

#[derive(Clone)]
pub struct AnalysisHandlers {
    raw_handler: Arc<RawAnalysisHandler>,
}

impl AnalysisHandlers {
    pub fn new(raw_handler: Arc<RawAnalysisHandler>) -> Self {
        Self { raw_handler }
    }
}

/// POST /api/analysis/raw - Analyse arbitrary text
pub async fn raw_analysis(
    State(handlers): State<AnalysisHandlers>,
    Json(req): Json<RawAnalysisRequest>,
) -> Response {
    match handlers
        .raw_handler
        .handle(RawAnalysisCommand { text: req.text })
        .await
    {
        Ok(analysis) => (StatusCode::OK, Json(RawAnalysisResponse { analysis })).into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(e.to_string())),
        )
            .into_response(),
    }
}

/// Creates the analysis router.
pub fn analysis_routes(handlers: AnalysisHandlers) -> Router {
    Router::new()
        .route("/raw", post(raw_analysis))
        .with_state(handlers)
}
