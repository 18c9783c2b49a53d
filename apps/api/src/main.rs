//! # Vacation API Server
//!
//! Binary entry point: configuration, store wiring, graceful shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use vacation_api::{build_router, ApiConfig, AppState};
use vacation_db::{Database, DbConfig};
use vacation_search::{SearchConfig, VacationSearchIndex};
use vacation_sync::SyncService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting Vacation API server...");

    // Load configuration
    let config = ApiConfig::load()?;
    info!(
        port = config.http_port,
        db_path = %config.database_path.display(),
        index_path = %config.search_index_path.display(),
        "Configuration loaded"
    );

    // Both stores live under the same data directory by default
    for path in [&config.database_path, &config.search_index_path] {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // Open the authoritative record store
    let db = Database::new(
        DbConfig::new(&config.database_path).max_connections(config.max_db_connections),
    )
    .await?;
    info!("Record store ready");

    // Open the search index (its own database file and pool)
    let index = VacationSearchIndex::open(SearchConfig::new(&config.search_index_path)).await?;

    // Wire the synchronization service
    let sync = Arc::new(SyncService::new(
        Arc::new(db.vacations()),
        Arc::new(index.clone()),
    ));

    let app = build_router(AppState { sync });

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.bind_addr, config.http_port).parse()?;
    info!(%addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    index.close().await;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
