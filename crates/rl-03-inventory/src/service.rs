//! # Inventory Service
//!
//! Implements `InventoryApi` over a stock store and an issued-count
//! source. The issued count is read from the transaction ledger on every
//! derivation, never cached, so remaining stock cannot drift from the
//! ledger's truth.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::InventoryError;
use crate::ports::inbound::InventoryApi;
use crate::ports::outbound::{InventoryStore, IssuedCounter};
use shared_types::{InventoryRecord, InventoryStatus, TimeSource};

/// Inventory Ledger service.
pub struct InventoryService<S: InventoryStore> {
    store: Arc<S>,
    counter: Arc<dyn IssuedCounter>,
    time: Arc<dyn TimeSource>,
}

impl<S: InventoryStore> InventoryService<S> {
    pub fn new(store: Arc<S>, counter: Arc<dyn IssuedCounter>, time: Arc<dyn TimeSource>) -> Self {
        Self {
            store,
            counter,
            time,
        }
    }
}

impl<S: InventoryStore> InventoryApi for InventoryService<S> {
    fn set_stock(
        &self,
        project_name: &str,
        location: &str,
        quantity: u64,
    ) -> Result<(), InventoryError> {
        let record = InventoryRecord {
            project_name: project_name.to_string(),
            location: location.to_string(),
            initial_quantity: quantity,
            last_updated: self.time.now(),
        };
        self.store.upsert(record)?;
        info!(
            project = project_name,
            location = location,
            quantity = quantity,
            "stock ceiling set"
        );
        Ok(())
    }

    fn get_stock(&self, project_name: &str, location: &str) -> Result<u64, InventoryError> {
        Ok(self
            .store
            .get(project_name, location)?
            .map(|r| r.initial_quantity)
            .unwrap_or(0))
    }

    fn remaining(&self, project_name: &str, location: &str) -> Result<i64, InventoryError> {
        Ok(self.status(project_name, location)?.remaining)
    }

    fn status(
        &self,
        project_name: &str,
        location: &str,
    ) -> Result<InventoryStatus, InventoryError> {
        let record = self.store.get(project_name, location)?;
        let configured = record.is_some();
        let initial_quantity = record.map(|r| r.initial_quantity).unwrap_or(0);
        let issued_count = self.counter.count_issued(project_name, location)?;
        let remaining = initial_quantity as i64 - issued_count as i64;

        if remaining < 0 {
            warn!(
                project = project_name,
                location = location,
                remaining = remaining,
                "over-issuance: issued count exceeds configured stock"
            );
        }

        Ok(InventoryStatus {
            configured,
            initial_quantity,
            issued_count,
            remaining,
        })
    }
}
