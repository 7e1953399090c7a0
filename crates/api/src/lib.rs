//! HTTP info service with observability.
//!
//! Exposes three routes: a templated HTML index, a server-info JSON endpoint
//! and a health snapshot endpoint, with structured logging (tracing).

pub mod config;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(config: Arc<Config>) -> Router {
    Router::new()
        .route("/", get(routes::index::get))
        .route("/sip", get(routes::server_info::get))
        .route("/health", get(routes::health::get))
        .with_state(config)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
