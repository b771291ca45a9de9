//! # chemlab-server
//!
//! The experiment computation service over HTTP.

pub mod config;
pub mod logging;
pub mod routes;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

pub use config::ServerConfig;
pub use routes::{router, ApiError};

/// Bind `addr` and serve until Ctrl+C.
pub async fn serve(addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    serve_on(listener).await
}

/// Serve on an already bound listener until Ctrl+C.
pub async fn serve_on(listener: TcpListener) -> Result<()> {
    let addr = listener.local_addr().context("listener has no local address")?;
    info!(%addr, "chemlab server listening");

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("chemlab server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
    }
}
