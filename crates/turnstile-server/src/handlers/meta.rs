//! Health, ping, and build-info endpoints.

use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};

/// `GET /healthz` - liveness probe, bare 200.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /ping`.
pub async fn ping() -> Json<Value> {
    Json(json!({ "message": "pong" }))
}

/// `GET /x` - build metadata.
pub async fn build_info(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "buildcommit": option_env!("BUILD_COMMIT").unwrap_or("dev"),
        "buildtime": state.started_at.to_rfc3339(),
    }))
}

/// `GET /limitz` - the rate-limited endpoint.
///
/// Admission happens in the middleware; by the time this runs the request
/// has already consumed a bucket token.
pub async fn limitz() -> Json<Value> {
    Json(json!({ "message": "pong" }))
}
