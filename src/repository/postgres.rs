//! Postgres implementation of TransactionRepository.

use async_trait::async_trait;

use super::{RepositoryResult, TransactionRepository};
use crate::{
    db::DbPool,
    models::transaction::{NewTransaction, Transaction},
};

/// Postgres-backed transaction repository.
///
/// Ids come from the `BIGSERIAL` primary key, so uniqueness under
/// concurrent inserts is guaranteed by the database.
#[derive(Clone)]
pub struct PgTransactionRepository {
    pool: DbPool,
}

impl PgTransactionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionRepository for PgTransactionRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Transaction>> {
        let transactions = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, amount, currency, description, occurred_at, created_at
            FROM transactions
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Transaction>> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, amount, currency, description, occurred_at, created_at
            FROM transactions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(transaction)
    }

    async fn save(&self, transaction: NewTransaction) -> RepositoryResult<Transaction> {
        let stored = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (amount, currency, description, occurred_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, amount, currency, description, occurred_at, created_at
            "#,
        )
        .bind(transaction.amount)
        .bind(&transaction.currency)
        .bind(&transaction.description)
        .bind(transaction.timestamp)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> RepositoryResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
