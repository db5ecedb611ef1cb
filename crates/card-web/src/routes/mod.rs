//! Route definitions
//!
//! HTML pages at the root, the JSON API under /api/v1 and static assets.

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers::{api, health, pages};
use crate::state::AppState;

/// Create the main router with all routes (excluding health for separate middleware handling)
pub fn create_router(static_dir: &Path) -> Router<AppState> {
    Router::new()
        .merge(page_routes())
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
        .merge(static_routes(static_dir))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// HTML pages
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::member_card_page))
        .route("/notices", get(pages::notices_page))
        .route("/player", get(pages::player_page))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/member-card", get(api::get_member_card))
        .route("/notices", get(api::get_notices))
}

/// Logo, audio, scripts and the root-scoped service worker
fn static_routes(static_dir: &Path) -> Router<AppState> {
    Router::new()
        .nest_service("/static", ServeDir::new(static_dir))
        .route_service(
            "/service-worker.js",
            ServeFile::new(static_dir.join("service-worker.js")),
        )
}
