//! Transaction data models and API request/response types.
//!
//! This module defines:
//! - `Transaction`: A persisted transaction record
//! - `NewTransaction`: A validated record that has not been stored yet
//! - `CreateTransactionRequest`: Request body for creating transactions
//! - `TransactionResponse`: Response body returned to clients
//!
//! The request and response types form version 1 of the wire contract.
//! They are kept separate from the stored types so the JSON shape can stay
//! stable while storage evolves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a persisted transaction record.
///
/// # Database Table
///
/// Maps to the `transactions` table. Each transaction:
/// - Has an `id` assigned by the store when it was saved
/// - Stores amount in minor units (cents), never floats
/// - Carries the time it occurred and the time it was stored
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Transaction {
    /// Unique identifier, assigned by the repository on save
    pub id: i64,

    /// Amount in minor units of `currency`
    ///
    /// Negative values represent outgoing money.
    pub amount: i64,

    /// Currency code (ISO 4217, 3 uppercase letters)
    pub currency: String,

    /// Human-readable description
    pub description: Option<String>,

    /// When the transaction occurred
    #[sqlx(rename = "occurred_at")]
    pub timestamp: DateTime<Utc>,

    /// When the record was stored
    pub created_at: DateTime<Utc>,
}

/// A validated transaction that has no id yet.
///
/// Only the service layer builds these, after validating a
/// `CreateTransactionRequest`. Repositories turn them into `Transaction`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub amount: i64,
    pub currency: String,
    pub description: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Request body for creating a transaction.
///
/// # JSON Example
///
/// ```json
/// {
///   "amount": 100,
///   "currency": "USD",
///   "description": "Coffee",
///   "timestamp": "2025-12-20T10:00:00Z"
/// }
/// ```
///
/// # Validation
///
/// - `id`: Optional, must be absent or `null` since the store assigns it
/// - `amount`: Required integer
/// - `currency`: Required, 3-letter alphabetic code (case-insensitive)
/// - `description`: Optional, at most 500 characters
/// - `timestamp`: Optional, defaults to the time of creation
///
/// Unknown fields are rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTransactionRequest {
    #[serde(default)]
    pub id: Option<i64>,

    pub amount: i64,

    pub currency: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Response body for transaction endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "amount": 100,
///   "currency": "USD",
///   "description": null,
///   "timestamp": "2025-12-20T10:00:00Z",
///   "created_at": "2025-12-20T10:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub id: i64,
    pub amount: i64,
    pub currency: String,
    pub description: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        Self {
            id: transaction.id,
            amount: transaction.amount,
            currency: transaction.currency,
            description: transaction.description,
            timestamp: transaction.timestamp,
            created_at: transaction.created_at,
        }
    }
}
