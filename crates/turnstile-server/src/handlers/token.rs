//! Token issuance endpoint.

use crate::error::ServerError;
use crate::state::AppState;
use axum::{Json, extract::State};
use serde::Serialize;

/// Response body for the issuance endpoint.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    /// The issued token, to be sent back verbatim in `Authorization`.
    pub token: String,
}

/// `GET /tokenz` - mint an access token.
///
/// Issuance is public: no credential is required, so the gate downstream
/// proves possession of an issued token rather than caller identity.
pub async fn issue(State(state): State<AppState>) -> Result<Json<TokenResponse>, ServerError> {
    let token = state.issuer.issue()?;
    Ok(Json(TokenResponse { token }))
}
