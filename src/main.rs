use std::sync::Arc;

use anyhow::Context;
use manochitram::{
    api::{create_router, AppState},
    config::Config,
    db::{create_pool, RecommendationStore},
    services::providers::TmdbCatalog,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("manochitram=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let pool = create_pool(&config.database_url)
        .await
        .context("Failed to open recommendation store")?;
    let store = RecommendationStore::new(pool);

    let catalog = TmdbCatalog::new(
        config.api_key(),
        config.catalog_api_url.clone(),
        config.image_base_url.clone(),
        config.request_timeout(),
    )?;

    // Initialize application state
    let state = AppState::new(&config, store, Arc::new(catalog));

    // Create the router with all routes
    let app = create_router(state.clone());

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(address = %addr, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.shutdown().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
