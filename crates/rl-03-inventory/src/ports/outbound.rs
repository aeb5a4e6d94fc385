//! # Outbound Ports - InventoryStore, IssuedCounter
//!
//! The inventory layer owns its stock records and treats the transaction
//! ledger as a read-only counting source; `IssuedCounter` is the whole of
//! that coupling.

use crate::domain::InventoryError;
use rl_02_distribution_ledger::LedgerApi;
use shared_types::{InventoryRecord, StoreError};

/// Backing store for stock records, keyed by `(project, location)`.
pub trait InventoryStore: Send + Sync {
    fn get(
        &self,
        project_name: &str,
        location: &str,
    ) -> Result<Option<InventoryRecord>, StoreError>;

    /// Inserts or replaces the record for its `(project, location)`.
    fn upsert(&self, record: InventoryRecord) -> Result<(), StoreError>;

    /// Every stock record, in unspecified order.
    fn scan(&self) -> Result<Vec<InventoryRecord>, StoreError>;
}

/// Read-only issued-count source.
pub trait IssuedCounter: Send + Sync {
    fn count_issued(&self, project_name: &str, location: &str) -> Result<u64, InventoryError>;
}

/// Counts issued rows through a ledger handle. This is the only direction
/// the inventory layer is allowed to look at the transaction ledger.
pub struct LedgerIssuedCounter {
    ledger: std::sync::Arc<dyn LedgerApi>,
}

impl LedgerIssuedCounter {
    pub fn new(ledger: std::sync::Arc<dyn LedgerApi>) -> Self {
        Self { ledger }
    }
}

impl IssuedCounter for LedgerIssuedCounter {
    fn count_issued(&self, project_name: &str, location: &str) -> Result<u64, InventoryError> {
        Ok(self.ledger.count_by(project_name, location)?)
    }
}
