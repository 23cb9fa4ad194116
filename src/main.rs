//! Admin Dashboard - Main Entry Point
//!
//! Configures the server with Axum routes and the Dioxus application.
//! Uses dioxus::serve() pattern for dx serve compatibility.

use admin_dashboard::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    // IMPORTANT: Use dioxus::server::axum, NOT axum directly
    use dioxus::server::axum::routing::{get, post};

    use admin_dashboard::config::AdminConfig;
    use admin_dashboard::handlers::{
        active_permissions_handler, profile_permissions_handler, reload_permissions_handler,
    };
    use admin_dashboard::infrastructure::init_permission_store;

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Admin Dashboard...");

    // dx owns the command line, configuration comes from the environment
    let store = AdminConfig::from_env().and_then(|config| init_permission_store(&config));
    match store {
        Ok(store) => tracing::info!(
            "Permission store ready: {} profiles, serving profile '{}'",
            store.profile_count(),
            store.active_profile()
        ),
        Err(e) => {
            tracing::error!("Failed to load permissions: {}", e);
            std::process::exit(1);
        }
    }

    dioxus::serve(|| async move {
        // NOTE: Axum 0.8 uses {param} syntax instead of :param
        let router = dioxus::server::router(App)
            .route("/api/permissions", get(active_permissions_handler))
            .route("/api/permissions/reload", post(reload_permissions_handler))
            .route("/api/permissions/{profile}", get(profile_permissions_handler));

        Ok(router)
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Admin Dashboard - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
