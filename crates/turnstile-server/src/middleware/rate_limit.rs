//! Admission middleware for the rate-limited endpoint.

use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

/// Consume one bucket token or reject with 429 immediately.
///
/// No queuing and no Retry-After hint: a rejected caller gets a final answer
/// for this request and may retry on its own schedule. Admission is
/// independent of authentication.
pub async fn admit(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if !state.limiter.allow() {
        return Err(StatusCode::TOO_MANY_REQUESTS);
    }

    Ok(next.run(req).await)
}
