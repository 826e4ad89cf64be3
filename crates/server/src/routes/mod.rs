//! API route handlers
//!
//! - `health`: liveness, readiness and Prometheus metrics
//! - `plagiarism`: submission scoring, pairwise comparison, corpus listing
//! - `proctoring`: log-only sinks for exam-client violation and telemetry reports

pub mod health;
pub mod plagiarism;
pub mod proctoring;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "codefp server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/api/plagiarism",
            "/api/compare",
            "/api/corpus",
            "/api/violation",
            "/api/telemetry",
            "/health",
            "/ready",
            "/metrics"
        ]
    })))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
