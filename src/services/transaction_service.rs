//! Transaction service - business rules around transaction storage.
//!
//! This service handles:
//! - Input validation for new transactions
//! - Existence checks for reads and deletes
//!
//! It holds no state of its own; every call goes to the repository.

use std::sync::Arc;

use chrono::Utc;

use crate::{
    error::AppError,
    models::transaction::{CreateTransactionRequest, NewTransaction, Transaction},
    repository::TransactionRepository,
};

/// Maximum accepted length of a transaction description, in characters.
const MAX_DESCRIPTION_LEN: usize = 500;

/// Transaction operations used by the HTTP handlers.
///
/// Cheap to clone; clones share the same repository.
#[derive(Clone)]
pub struct TransactionService {
    repository: Arc<dyn TransactionRepository>,
}

impl TransactionService {
    pub fn new(repository: Arc<dyn TransactionRepository>) -> Self {
        Self { repository }
    }

    /// Name of the storage backend in use.
    pub fn backend(&self) -> &'static str {
        self.repository.backend()
    }

    /// Check that the storage backend is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await?;
        Ok(())
    }

    /// List all stored transactions, ordered by id.
    pub async fn list(&self) -> Result<Vec<Transaction>, AppError> {
        let transactions = self.repository.find_all().await?;
        tracing::debug!(count = transactions.len(), "Listed transactions");
        Ok(transactions)
    }

    /// Get a transaction by id.
    ///
    /// # Errors
    ///
    /// - `NotFound`: No transaction with this id
    /// - `Repository`: Storage failure
    pub async fn get_by_id(&self, id: i64) -> Result<Transaction, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound(id))
    }

    /// Validate and store a new transaction.
    ///
    /// # Process
    ///
    /// 1. Validate and normalize the request
    /// 2. Save through the repository, which assigns the id
    /// 3. Return the stored record
    ///
    /// # Errors
    ///
    /// - `Validation`: The request is malformed
    /// - `Repository`: Storage failure
    pub async fn create(&self, request: CreateTransactionRequest) -> Result<Transaction, AppError> {
        let new_transaction = match validate_new_transaction(request) {
            Ok(valid) => valid,
            Err(err) => {
                tracing::warn!(error = %err, "Rejected transaction");
                return Err(err);
            }
        };

        let transaction = self.repository.save(new_transaction).await?;
        tracing::debug!(id = transaction.id, "Created transaction");

        Ok(transaction)
    }

    /// Delete a transaction by id.
    ///
    /// Not idempotent: deleting the same id twice fails the second time.
    ///
    /// # Errors
    ///
    /// - `NotFound`: No transaction with this id
    /// - `Repository`: Storage failure
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete_by_id(id).await? {
            return Err(AppError::NotFound(id));
        }

        tracing::debug!(id, "Deleted transaction");
        Ok(())
    }
}

/// Validate a create request and turn it into a storable record.
///
/// # Rules
///
/// - Id must be absent; the store assigns it
/// - Currency is trimmed and uppercased, then must be 3 ASCII letters
/// - Description is trimmed; blank becomes `None`; at most 500 characters
/// - Missing timestamp defaults to now
fn validate_new_transaction(request: CreateTransactionRequest) -> Result<NewTransaction, AppError> {
    if let Some(id) = request.id {
        return Err(AppError::Validation(format!(
            "Id {} must not be supplied for a new transaction",
            id
        )));
    }

    let currency = request.currency.trim().to_ascii_uppercase();
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::Validation(
            "Currency must be a 3-letter ISO 4217 code".to_string(),
        ));
    }

    let description = request
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    if let Some(ref d) = description {
        if d.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(AppError::Validation(format!(
                "Description exceeds {} characters",
                MAX_DESCRIPTION_LEN
            )));
        }
    }

    Ok(NewTransaction {
        amount: request.amount,
        currency,
        description,
        timestamp: request.timestamp.unwrap_or_else(Utc::now),
    })
}
