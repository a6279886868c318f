//! Storage abstraction for transaction records.
//!
//! The service layer talks to storage only through [`TransactionRepository`].
//! Two implementations are provided:
//! - [`PgTransactionRepository`]: PostgreSQL via sqlx
//! - [`InMemoryTransactionRepository`]: process-local store, used when no
//!   database is configured and by the test suites

mod memory;
mod postgres;

pub use memory::InMemoryTransactionRepository;
pub use postgres::PgTransactionRepository;

use async_trait::async_trait;

use crate::models::transaction::{NewTransaction, Transaction};

/// Storage-layer failure. The cause is opaque to callers above the service.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// CRUD primitives over persisted transactions.
///
/// Implementations must assign unique ids under concurrent `save` calls and
/// keep operations on disjoint ids independent of each other.
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// All stored records, ordered by ascending id.
    async fn find_all(&self) -> RepositoryResult<Vec<Transaction>>;

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Transaction>>;

    /// Store a new record and return it with its assigned id.
    async fn save(&self, transaction: NewTransaction) -> RepositoryResult<Transaction>;

    /// Returns `true` if a record existed and was removed.
    async fn delete_by_id(&self, id: i64) -> RepositoryResult<bool>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> RepositoryResult<()>;

    /// Short backend name used in logs and health output.
    fn backend(&self) -> &'static str;
}
