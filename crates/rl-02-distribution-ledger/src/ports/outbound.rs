//! # Outbound Port - TransactionStore
//!
//! Driven port for the ledger's backing store. The uniqueness constraint on
//! `(beneficiary_id, project_name)` lives HERE, inside each adapter, so that
//! it holds under concurrent callers and across independent processes.

use crate::domain::InsertResult;
use shared_types::{DistributionTransaction, StoreError, TransactionKey};

/// Backing store for distribution transactions.
///
/// Implementations are `Send + Sync` with interior mutability: one store
/// handle is shared by every scan terminal in the process.
pub trait TransactionStore: Send + Sync {
    /// Inserts the transaction unless its key is already present.
    ///
    /// This is the storage-enforced compound-unique constraint: the
    /// presence check and the insert happen under a single lock
    /// acquisition (in-memory mutex, or an exclusive file lock for the
    /// cross-process adapter). Returns the existing row on conflict.
    fn insert_if_absent(
        &self,
        tx: DistributionTransaction,
    ) -> Result<InsertResult, StoreError>;

    /// Fetches the row for a key, if present.
    fn get(&self, key: &TransactionKey) -> Result<Option<DistributionTransaction>, StoreError>;

    /// Returns every row in the store, in store order.
    fn scan(&self) -> Result<Vec<DistributionTransaction>, StoreError>;
}
