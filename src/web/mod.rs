//! # Web API
//!
//! Axum surface for the release workflow, intended to be called directly
//! from trusted front-end clients: wildcard CORS, JSON bodies, camelCase
//! wire form.

pub mod errors;
pub mod handlers;
pub mod state;

use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::web::state::AppState;

/// Build the application router with the production middleware stack:
/// request timeout, wildcard CORS (preflight answered by the layer), and
/// request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/bookings/release", post(handlers::release::release_booking))
        .route("/health", get(handlers::health::health))
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
