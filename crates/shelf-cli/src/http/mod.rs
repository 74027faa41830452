//! HTTP server: JSON API under `/api`, the browser UI at `/`.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod router;


use anyhow::{Context, Result};
use log::{error, info};
use shelf_core::Catalog;
use tokio::net::TcpListener;

pub use config::ServerConfig;
pub use router::{create_router, AppState};

/// Serve the catalog until Ctrl-C or SIGTERM.
pub async fn serve(catalog: Catalog, config: ServerConfig) -> Result<()> {
    let router = create_router(AppState { catalog }, &config);
    let addr = config.socket_addr();

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on http://{addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Shutdown signal received");
}
