//! HTTP server for the movie catalog.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use server::{create_router, load_catalog, AppState, CatalogService, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("info,server=debug,pipeline=debug,recommender=debug,tower_http=debug")
        }))
        .init();

    let config = ServerConfig::parse();

    info!("Loading catalog...");
    let store = load_catalog(config.catalog.as_deref()).context("Failed to load catalog")?;
    info!("Catalog loaded with {} movies", store.len());

    let service = Arc::new(CatalogService::new(Arc::new(store)));
    let app = create_router(AppState::new(service));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Movie recommendation API running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
