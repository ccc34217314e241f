//! Nexora Static Server
//!
//! Axum server hosting the bundled WASM landing page. Any path that is not
//! a file in the bundle falls back to `index.html`.

mod handlers;
mod state;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::handlers::health_check;
use crate::state::{AppState, ServerConfig};

/// Build the application router
fn app(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir)
        .fallback(ServeFile::new(state.config.index_file()));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env();

    if config.index_file().exists() {
        tracing::info!("✓ Frontend bundle found in {}", config.static_dir.display());
    } else {
        tracing::warn!("⚠ No index.html in {}", config.static_dir.display());
        tracing::warn!("  Build the frontend first: trunk build --release (in crates/nexora-web)");
    }

    let addr = config.bind_addr.clone();
    let state = AppState {
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 Nexora site running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health - Health check");
    tracing::info!("  GET  /*      - Landing page bundle");

    axum::serve(listener, app(state)).await?;

    Ok(())
}
