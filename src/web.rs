use anyhow::{Context, Result};
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::api::{self, AppState};
use crate::config::ServiceConfig;

/// Full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", api::router(state))
        .route("/status", get(status))
        .layer(TraceLayer::new_for_http())
}

async fn status() -> &'static str {
    "Service is running"
}

pub async fn run(config: &ServiceConfig, state: AppState) -> Result<()> {
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Could not bind {addr}"))?;
    tracing::info!("Starting server on {}", addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
