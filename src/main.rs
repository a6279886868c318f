//! Transaction Ledger - Main Application Entry Point
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Choose the storage backend (PostgreSQL if `DATABASE_URL` is set)
//! 3. Run database migrations when using PostgreSQL
//! 4. Build the service and the HTTP router
//! 5. Serve until Ctrl-C

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use transaction_ledger::{
    AppState,
    config::Config,
    db,
    repository::{InMemoryTransactionRepository, PgTransactionRepository, TransactionRepository},
    router,
    services::TransactionService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let repository = build_repository(&config).await?;
    tracing::info!(backend = repository.backend(), "Storage ready");

    let state = AppState::new(TransactionService::new(repository));
    let app = router(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Pick the repository implementation from configuration.
async fn build_repository(config: &Config) -> anyhow::Result<Arc<dyn TransactionRepository>> {
    match &config.database_url {
        Some(url) => {
            let pool = db::create_pool(url, config.database_max_connections).await?;
            tracing::info!("Database pool created");

            db::run_migrations(&pool).await?;
            tracing::info!("Database migrations complete");

            Ok(Arc::new(PgTransactionRepository::new(pool)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, transactions will be kept in memory");
            Ok(Arc::new(InMemoryTransactionRepository::new()))
        }
    }
}

/// Resolves when Ctrl-C is received, letting in-flight requests finish.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}
