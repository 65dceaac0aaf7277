//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, service wiring, and Axum server lifecycle.

use crate::application::services::{AuthService, LinkService, PasswordService, TokenService};
use crate::config::Config;
use crate::infrastructure::persistence::{self, SqliteUrlRepository, SqliteUserRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Apply migrations
/// - Password hasher, token issuer and the services built on them
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Argon2 parameters are rejected
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = Arc::new(persistence::connect(&config).await?);
    tracing::info!("Connected to database");

    let url_repository = Arc::new(SqliteUrlRepository::new(pool.clone()));
    let user_repository = Arc::new(SqliteUserRepository::new(pool));

    let passwords = Arc::new(
        PasswordService::new(config.argon2_memory_kib, config.argon2_iterations)
            .map_err(|e| anyhow::anyhow!("Invalid Argon2 parameters: {}", e))?,
    );
    let tokens = Arc::new(TokenService::new(&config.jwt_secret));

    let link_service = Arc::new(LinkService::new(
        url_repository,
        config.alias_length,
        config.alias_max_attempts,
    ));
    let auth_service = Arc::new(AuthService::new(user_repository, passwords, tokens));

    let state = AppState::new(link_service, auth_service);

    let app = app_router(state, Duration::from_secs(config.request_timeout));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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

    tracing::info!("Shutdown signal received, draining connections");
}
