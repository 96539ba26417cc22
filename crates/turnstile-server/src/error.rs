//! Error types for the server crate.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors that can occur while serving requests.
///
/// Auth and rate-limit rejections are not represented here: the middleware
/// answers those with a bare status code so no detail about why a token
/// failed ever reaches the caller.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Token issuance failed.
    #[error("token error: {0}")]
    Token(#[from] turnstile_token::TokenError),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
