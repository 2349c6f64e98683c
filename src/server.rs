//! HTTP server initialization and runtime setup.
//!
//! Handles storage initialization, service wiring and the Axum server lifecycle.

use crate::application::services::{AuthService, UrlService};
use crate::config::Config;
use crate::infrastructure::persistence::SqliteAliasRegistry;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite registry (schema applied on open)
/// - URL and authentication services
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Storage initialization fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let registry = SqliteAliasRegistry::open(&config.storage_path, config.db_max_connections)
        .await
        .context("failed to init storage")?;
    tracing::info!("Storage ready");

    let state = build_state(registry, &config);
    let app = app_router(state, Duration::from_secs(config.request_timeout));

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    let addr: SocketAddr = listener.local_addr()?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Wires services around an opened registry.
pub fn build_state(registry: SqliteAliasRegistry, config: &Config) -> AppState {
    let url_service = Arc::new(UrlService::new(Arc::new(registry), config.alias_length));
    let auth_service = Arc::new(AuthService::new(
        config.http_user.clone(),
        config.http_password.clone(),
    ));

    AppState::new(url_service, auth_service)
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
