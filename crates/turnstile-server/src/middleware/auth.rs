//! Bearer-token gate for the protected route group.

use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::Response,
};
use turnstile_token::AuthDecision;

/// Reject any request whose `Authorization` header does not carry a token
/// signed under the shared secret.
///
/// The header value is the token verbatim; there is no `Bearer ` scheme
/// prefix. An absent or empty header verifies as malformed input, and every
/// non-valid outcome maps to a bare 401 so callers learn nothing about why a
/// token failed. On success the request is forwarded unchanged, with the
/// recovered claims attached as an extension.
pub async fn require_token(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    match state.signer.verify(token) {
        AuthDecision::Valid(claims) => {
            req.extensions_mut().insert(claims);
            Ok(next.run(req).await)
        }
        AuthDecision::Invalid | AuthDecision::Malformed => Err(StatusCode::UNAUTHORIZED),
    }
}
