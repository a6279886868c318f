//! PostgreSQL setup for the durable transaction store.
//!
//! Only touched when `DATABASE_URL` is set; otherwise the ledger runs on the
//! in-memory repository and this module is never called.

use sqlx::{Pool, Postgres};

/// Pool shared by `PgTransactionRepository`.
pub type DbPool = Pool<Postgres>;

/// Connect to the ledger database.
///
/// `max_connections` comes from `DATABASE_MAX_CONNECTIONS` and bounds how
/// many requests can hit storage at once.
///
/// # Errors
///
/// Fails if the URL is malformed or the server refuses the connection.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Create or upgrade the `transactions` table.
///
/// Safe to call on every startup; applied versions are skipped.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    // Embedded from ./migrations at compile time
    sqlx::migrate!("./migrations").run(pool).await
}
