//! HTTP adapters - REST API implementations.
//!
//! Each module has its own HTTP adapter for endpoint exposure; `app_router`
//! mounts them under `/api` together with the health check and the shared
//! tower layers.

pub mod analysis;
pub mod quiz;

use std::time::Duration;

use axum::{routing::get, Json, Router};
use http::{header::CONTENT_TYPE, HeaderValue, Method};
use serde_json::{json, Value};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

pub use analysis::{analysis_routes, AnalysisHandlers};
pub use quiz::{quiz_routes, QuizHandlers};

/// Settings for the shared middleware stack.
#[derive(Debug, Clone)]
pub struct RouterSettings {
    pub request_timeout: Duration,
    /// Allowed CORS origins; empty allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            cors_origins: Vec::new(),
        }
    }
}

/// GET /health - Liveness check
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Builds the full application router.
pub fn app_router(
    quiz: QuizHandlers,
    analysis: AnalysisHandlers,
    settings: &RouterSettings,
) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/quiz", quiz_routes(quiz))
        .nest("/api/analysis", analysis_routes(analysis))
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(cors_layer(&settings.cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if parsed.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(AllowOrigin::list(parsed))
    }
}
