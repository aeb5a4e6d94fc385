//! In-memory transaction store.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::InsertResult;
use crate::ports::outbound::TransactionStore;
use shared_types::{DistributionTransaction, StoreError, TransactionKey};

/// In-memory transaction store for unit tests and single-process
/// deployments.
///
/// The compound-unique constraint is enforced by performing the presence
/// check and the insert under one mutex acquisition. Multi-terminal
/// deployments on a shared volume use `FileTransactionStore` instead.
#[derive(Default)]
pub struct InMemoryTransactionStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    /// Rows in insertion order (the journal the file adapter would hold).
    rows: Vec<DistributionTransaction>,
    /// Compound-unique index into `rows`.
    index: HashMap<TransactionKey, usize>,
}

impl InMemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> Result<std::sync::MutexGuard<'_, Inner>, StoreError> {
        self.inner.lock().map_err(|_| StoreError::Locked {
            message: "transaction store mutex poisoned".to_string(),
        })
    }
}

impl TransactionStore for InMemoryTransactionStore {
    fn insert_if_absent(
        &self,
        tx: DistributionTransaction,
    ) -> Result<InsertResult, StoreError> {
        let mut inner = self.locked()?;
        let key = tx.key();
        match inner.index.get(&key) {
            Some(&pos) => Ok(InsertResult::Conflict(Box::new(inner.rows[pos].clone()))),
            None => {
                let pos = inner.rows.len();
                inner.rows.push(tx);
                inner.index.insert(key, pos);
                Ok(InsertResult::Inserted)
            }
        }
    }

    fn get(&self, key: &TransactionKey) -> Result<Option<DistributionTransaction>, StoreError> {
        let inner = self.locked()?;
        Ok(inner.index.get(key).map(|&pos| inner.rows[pos].clone()))
    }

    fn scan(&self) -> Result<Vec<DistributionTransaction>, StoreError> {
        Ok(self.locked()?.rows.clone())
    }
}
