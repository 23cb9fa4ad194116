//! Standalone permissions API server (without Dioxus frontend)
//! Use this for API-only testing or backend development.
//!
//! Run with: cargo run --bin server --features server -- --permissions-file permissions.json

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use admin_dashboard::config::AdminConfig;
use admin_dashboard::handlers::{
    active_permissions_handler, profile_permissions_handler, reload_permissions_handler,
};
use admin_dashboard::infrastructure::init_permission_store;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Admin Dashboard API Server (standalone)...");

    let config = AdminConfig::parse();

    if let Err(e) = init_permission_store(&config) {
        tracing::error!("Failed to load permissions: {}", e);
        std::process::exit(1);
    }

    // NOTE: Axum 0.8 uses {param} syntax instead of :param
    let app = Router::new()
        .route("/api/permissions", get(active_permissions_handler))
        .route("/api/permissions/reload", post(reload_permissions_handler))
        .route("/api/permissions/{profile}", get(profile_permissions_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    tracing::info!("Server running on http://{}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
    }
}
