//! HTTP server initialization and lifecycle.
//!
//! Wires storage, service, and metrics into shared state, then serves the
//! router until a shutdown signal arrives. In-flight requests get a bounded
//! drain window before the process gives up on them.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use tokio::sync::oneshot;

use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::storage::MemoryStorage;
use crate::metrics::HttpMetrics;
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if the listen address does not parse, the bind fails, or
/// the server hits a runtime error.
pub async fn run(config: Config) -> Result<()> {
    let storage = Arc::new(MemoryStorage::new());
    let link_service = Arc::new(LinkService::new(storage));
    let metrics = Arc::new(HttpMetrics::new());

    let state = AppState::new(link_service, config.base_url.clone(), metrics);
    let app = app_router(state, &config);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    let (drain_tx, drain_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        axum::serve(
            listener,
            ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
        )
        .with_graceful_shutdown(async move {
            let _ = drain_rx.await;
        })
        .await
    });

    shutdown_signal().await;
    tracing::info!("Shutdown signal received, draining connections");
    let _ = drain_tx.send(());

    match tokio::time::timeout(config.shutdown_timeout(), server).await {
        Ok(joined) => joined??,
        Err(_) => {
            tracing::warn!(
                "Drain deadline of {}s exceeded, abandoning open connections",
                config.shutdown_timeout_seconds
            );
        }
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Waits for SIGTERM or SIGINT (Ctrl+C on non-Unix platforms).
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");

        tokio::select! {
            _ = sigterm.recv() => {
                tracing::info!("Received SIGTERM");
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received SIGINT");
            }
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to wait for Ctrl+C");
        tracing::info!("Received Ctrl+C");
    }
}
