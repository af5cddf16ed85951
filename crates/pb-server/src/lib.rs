//! pb-server: HTTP API over the in-memory photo store.
//!
//! This crate wires a [`pb_store::PhotoStore`] into an Axum router and runs it
//! until a shutdown signal arrives. It provides:
//!
//! - Photo CRUD routes with request validation and `{detail}` error bodies
//! - API info, health, and OpenAPI document endpoints
//! - Request ID propagation and HTTP tracing
//! - Graceful shutdown via signal handling

pub mod context;
pub mod error;
pub mod middleware;
pub mod router;
pub mod routes;

use pb_core::config::Config;

use crate::context::AppContext;

/// Start the photoblog server.
///
/// Builds a fresh [`AppContext`] from `config`, binds the configured address,
/// and serves until Ctrl+C or SIGTERM.
pub async fn start(config: Config) -> pb_core::Result<()> {
    for warning in config.validate() {
        tracing::warn!("Config warning: {warning}");
    }

    let host = config.server.host.clone();
    let port = config.server.port;

    let ctx = AppContext::new(config);
    let app = router::build_router(ctx);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .map_err(|e| pb_core::Error::Internal(format!("Failed to bind to {host}:{port}: {e}")))?;

    tracing::info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Shutdown signal received");
}
