//! Axum router: maps URL paths to handlers.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{
    api::{api_scores, api_thresholds},
    dashboard::dashboard,
    system::health,
};
use crate::state::{AppState, SharedState};

/// Directory served under `/static`.
pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/", get(dashboard))
        // API endpoints
        .route("/api/scores", get(api_scores))
        .route("/api/thresholds", get(api_thresholds))
        .route("/health", get(health))
        // Static files
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
