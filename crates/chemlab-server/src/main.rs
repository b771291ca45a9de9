//! ChemLab server: runs experiments posted as JSON.

use anyhow::Result;
use chemlab_server::{logging, serve, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(logging::env_filter())
        .init();

    let config = ServerConfig::parse();
    serve(config.socket_addr()).await
}
