// src/serve/mod.rs
// =============================================================================
// A small static file server.
//
// Serves index.html at "/" and every other file under the root directory
// as-is, so the same page that gets graded locally can be opened in a
// browser or graded again with --url.
// =============================================================================

mod static_files;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::{error, info};

use static_files::{index, static_file, ServeState};

// Builds the router for a root directory
pub fn router(root: PathBuf) -> Router {
    let state = Arc::new(ServeState { root });
    Router::new()
        .route("/", get(index))
        .fallback(get(static_file))
        .with_state(state)
}

// Binds 0.0.0.0:<port> and serves until Ctrl-C
pub async fn start(port: u16, root: PathBuf) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Listening on {}", port);
    info!("Serving files from {}", root.display());

    axum::serve(listener, router(root))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl-C: {}", e);
    }
}
