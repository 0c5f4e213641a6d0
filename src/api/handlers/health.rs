use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::{AppState, routes};

/// Health check endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health
///
/// Always reports the service as available. The status word depends on the
/// configured response style: `"UP"` for JSON, `"ok"` for plain.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.metrics.record_request("GET", routes::HEALTH);
    tracing::debug!("Health check");

    let response = HealthResponse {
        status: state.config.response_style.health_status().to_string(),
    };

    (StatusCode::OK, Json(response))
}
