//! # turnstile-server
//!
//! HTTP composition root for the Turnstile auth gate.
//!
//! Wires the token issuer, the bearer-token gate, and the admission bucket
//! onto an axum router:
//! - public endpoints: `/healthz`, `/ping`, `/x`, `/tokenz`
//! - rate-limited: `/limitz` behind a global token bucket
//! - protected: `/todos` behind the auth gate
//!
//! The gate and the bucket are dependency-injected through [`state::AppState`];
//! nothing in the request path reaches for ambient globals.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod rate_limit;
pub mod routes;
pub mod state;
pub mod todo;
