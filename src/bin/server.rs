//! Roster HTTP Server Binary
//!
//! This is the main entry point for the roster REST API server.
//! It initializes the repository, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with local (in-memory) repository (default)
//! cargo run --bin roster-server --features "local-repo,http-server"
//!
//! # Run against the remote roster API
//! ROSTER_API_URL=http://localhost:8000 \
//!   cargo run --bin roster-server --features "remote-repo,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `ROSTER_API_URL`: Base URL of the roster REST collaborator (required
//!   for the remote-repo feature)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use roster_rust::db;
use roster_rust::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting roster HTTP server");

    // Initialize global repository once and reuse it across the app
    db::init_repository().map_err(|e| anyhow::anyhow!(e))?;
    let repository = std::sync::Arc::clone(db::get_repository()?);
    info!("Repository initialized successfully");

    // Create application state
    let state = AppState::new(repository);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Availability endpoint: http://{}/v1/availability", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
