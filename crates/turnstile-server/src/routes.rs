//! Route registration.

use crate::handlers;
use crate::middleware::{auth, rate_limit};
use crate::state::AppState;
use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header},
    middleware::from_fn_with_state,
    routing::{delete, get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use turnstile_core::CorsConfig;

/// Assemble the full application router.
///
/// Three groups, mirroring the admission rules:
/// - public: `/healthz`, `/ping`, `/x`, `/tokenz`
/// - rate-limited: `/limitz` behind the bucket
/// - protected: `/todos` behind the auth gate
///
/// The gate layers are attached per group, so verification always runs
/// before the handler and an unprotected route never pays for it.
pub fn create_router(state: AppState, cors: &CorsConfig) -> Router {
    let protected = Router::new()
        .route("/todos", post(handlers::todos::create).get(handlers::todos::list))
        .route("/todos/{id}", delete(handlers::todos::remove))
        .route_layer(from_fn_with_state(state.clone(), auth::require_token));

    let limited = Router::new()
        .route("/limitz", get(handlers::meta::limitz))
        .route_layer(from_fn_with_state(state.clone(), rate_limit::admit));

    Router::new()
        .route("/healthz", get(handlers::meta::healthz))
        .route("/ping", get(handlers::meta::ping))
        .route("/x", get(handlers::meta::build_info))
        .route("/tokenz", get(handlers::token::issue))
        .merge(limited)
        .merge(protected)
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origin = match config.allow_origin.parse::<HeaderValue>() {
        Ok(origin) => origin,
        Err(_) => {
            tracing::warn!(
                origin = %config.allow_origin,
                "Invalid allowed origin, falling back to default"
            );
            HeaderValue::from_static("http://localhost:8080")
        }
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([
            header::ORIGIN,
            header::AUTHORIZATION,
            HeaderName::from_static("transactionid"),
        ])
}
