//! HTTP server for the summarization gateway

pub mod error;
pub mod handlers;

use anyhow::{Context, Result};
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Settings;
use crate::gateway::Gateway;

/// Build the router with all gateway routes.
pub fn router(gateway: Gateway) -> Router {
    Router::new()
        .route("/summarize", post(handlers::summarize))
        .route("/summarize-agenda", post(handlers::summarize_agenda))
        .route("/retry-summary", post(handlers::retry_summary))
        .route("/customize-prompt", post(handlers::customize_prompt))
        .layer(TraceLayer::new_for_http())
        .with_state(gateway)
}

/// Run the gateway until Ctrl-C
pub async fn serve(settings: &Settings) -> Result<()> {
    // Refuse to start without credentials.
    settings.require_api_key()?;

    let gateway = Gateway::from_settings(settings)?;
    let addr = settings.bind_addr();

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(
        addr = %listener.local_addr()?,
        version = crate::VERSION,
        provider = %settings.llm.provider,
        model = %settings.llm.model,
        "{} listening",
        crate::APP_NAME
    );

    axum::serve(listener, router(gateway))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
