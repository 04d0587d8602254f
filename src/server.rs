//! HTTP server initialization and runtime setup.
//!
//! Builds the entity store, wires the services and runs the Axum server
//! until Ctrl-C or SIGTERM.

use crate::config::{Config, StoreBackend};
use crate::infrastructure::memory::InMemoryStore;
use crate::infrastructure::persistence::{PgOwnerRepository, PgPetRepository, PgVisitRepository};
use crate::infrastructure::seed::load_sample_data;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations, or the in-memory store
///   preloaded with sample data
/// - Owner, pet and visit services
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = match config.store_backend {
        StoreBackend::Postgres => postgres_state(&config).await?,
        StoreBackend::Memory => memory_state().await?,
    }
    .with_services(&config.services);

    let app = app_router(state, &config);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn postgres_state(config: &Config) -> Result<AppState> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is required for the postgres store")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let pool = Arc::new(pool);
    Ok(AppState::new(
        Arc::new(PgOwnerRepository::new(pool.clone())),
        Arc::new(PgPetRepository::new(pool.clone())),
        Arc::new(PgVisitRepository::new(pool)),
    ))
}

async fn memory_state() -> Result<AppState> {
    let store = Arc::new(InMemoryStore::new());
    load_sample_data(store.as_ref(), store.as_ref(), store.as_ref())
        .await
        .context("Failed to load sample data")?;
    tracing::warn!("Using in-memory store; data is lost on restart");

    Ok(AppState::new(store.clone(), store.clone(), store))
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

    tracing::info!("Shutting down gracefully");
}
