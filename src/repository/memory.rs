//! In-memory implementation of TransactionRepository.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{RepositoryResult, TransactionRepository};
use crate::models::transaction::{NewTransaction, Transaction};

struct Store {
    records: BTreeMap<i64, Transaction>,
    last_id: i64,
}

/// Process-local transaction store.
///
/// Ids start at 1 and are never reused, even after deletes. Cloning shares
/// the same underlying store.
#[derive(Clone)]
pub struct InMemoryTransactionRepository {
    data: Arc<RwLock<Store>>,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(Store {
                records: BTreeMap::new(),
                last_id: 0,
            })),
        }
    }
}

impl Default for InMemoryTransactionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Transaction>> {
        let data = self.data.read().await;
        Ok(data.records.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Transaction>> {
        let data = self.data.read().await;
        Ok(data.records.get(&id).cloned())
    }

    async fn save(&self, transaction: NewTransaction) -> RepositoryResult<Transaction> {
        let mut data = self.data.write().await;

        // Id is taken under the write lock so concurrent saves never collide
        data.last_id += 1;
        let id = data.last_id;

        let stored = Transaction {
            id,
            amount: transaction.amount,
            currency: transaction.currency,
            description: transaction.description,
            timestamp: transaction.timestamp,
            created_at: Utc::now(),
        };
        data.records.insert(id, stored.clone());

        Ok(stored)
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<bool> {
        let mut data = self.data.write().await;
        Ok(data.records.remove(&id).is_some())
    }

    async fn ping(&self) -> RepositoryResult<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
