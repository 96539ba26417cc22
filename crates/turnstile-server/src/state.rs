//! Shared application state.

use crate::rate_limit::RateLimiter;
use crate::todo::TodoStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use turnstile_core::AppConfig;
use turnstile_token::{Secret, TokenError, TokenIssuer, TokenSigner};

/// Shared application state, cloned into every handler and middleware.
///
/// All components are constructed once at startup by the composition root
/// and injected here, which keeps the gate and the bucket testable without a
/// live process environment.
#[derive(Clone)]
pub struct AppState {
    /// Verifies tokens presented to the protected group.
    pub signer: TokenSigner,
    /// Mints tokens for the public issuance endpoint.
    pub issuer: TokenIssuer,
    /// Global admission bucket guarding the rate-limited endpoint.
    pub limiter: Arc<RateLimiter>,
    /// In-memory todo collaborator behind the gate.
    pub todos: Arc<TodoStore>,
    /// Process start time, reported by the build-info endpoint.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Build state from resolved configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, TokenError> {
        let secret = Secret::new(config.auth.secret.clone())?;
        let signer = TokenSigner::new(secret);

        Ok(Self {
            issuer: TokenIssuer::new(signer.clone()),
            signer,
            limiter: Arc::new(RateLimiter::new(config.rate_limit)),
            todos: Arc::new(TodoStore::new()),
            started_at: Utc::now(),
        })
    }
}
