//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use card_client::{BackendClient, HttpMemberRepository, HttpNoticeRepository};
use card_common::{AppConfig, AppError};
use card_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health probes get the basic middleware only, so they are never rate limited.
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let router = apply_middleware_with_config(
        create_router(Path::new(&config.site.static_dir)),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;
    let router = router.merge(apply_middleware(health_routes()));
    Ok(router.with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create backend client
    let client = BackendClient::new(&config.backend).map_err(|e| AppError::Config(e.to_string()))?;
    info!(
        api_base = %client.api_base(),
        notices_transport = ?client.notices_transport(),
        "Backend client ready"
    );

    // Create repositories
    let member_repo = Arc::new(HttpMemberRepository::new(client.clone()));
    let notice_repo = Arc::new(HttpNoticeRepository::new(client));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .member_repo(member_repo)
        .notice_repo(notice_repo)
        .dates(config.site.date_formatter()?)
        .audio_path(config.site.audio_path.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .web
        .address()
        .parse()
        .map_err(|_| AppError::Config(format!("Invalid listen address: {}", config.web.address())))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state)?;

    // Run server
    run_server(app, addr).await
}
