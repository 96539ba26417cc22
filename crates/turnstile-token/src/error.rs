//! Error types for the token crate.

use thiserror::Error;

/// Errors that can occur while constructing or signing tokens.
///
/// Verification failures are not represented here: a bad token is an
/// ordinary [`AuthDecision`](crate::token::AuthDecision) outcome, not an
/// error.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The signing secret is empty.
    #[error("signing secret is empty")]
    EmptySecret,

    /// Failed to serialize claims into the token payload.
    #[error("failed to serialize claims: {0}")]
    SerializeClaims(#[from] serde_json::Error),
}
