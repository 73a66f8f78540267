//! Nautic Service storefront library.
//!
//! The storefront is built as a library so the binary stays thin and the
//! integration tests can boot the full router in-process.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod shopify;
pub mod state;

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use state::AppState;

/// Directory served under `/static` (workspace-relative, like the data dir).
const STATIC_DIR: &str = "crates/storefront/static";

/// Build the complete application router.
///
/// Sentry's tower layers are added by the binary, not here, so tests run
/// without an error-tracking transport.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(middleware::request_id_middleware))
                .layer(axum::middleware::from_fn(middleware::csp_nonce_middleware))
                .layer(session_layer)
                .layer(axum::middleware::from_fn(
                    middleware::security_headers_middleware,
                )),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. There are no dependencies worth
/// checking: a broken catalog degrades pages, it does not take them down.
async fn health() -> &'static str {
    "ok"
}
