//! In-memory stock store.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::ports::outbound::InventoryStore;
use shared_types::{InventoryRecord, StoreError};

/// In-memory stock store for unit tests and single-process deployments.
#[derive(Default)]
pub struct InMemoryInventoryStore {
    records: Mutex<HashMap<(String, String), InventoryRecord>>,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<(String, String), InventoryRecord>>, StoreError>
    {
        self.records.lock().map_err(|_| StoreError::Locked {
            message: "inventory store mutex poisoned".to_string(),
        })
    }
}

impl InventoryStore for InMemoryInventoryStore {
    fn get(
        &self,
        project_name: &str,
        location: &str,
    ) -> Result<Option<InventoryRecord>, StoreError> {
        let records = self.locked()?;
        Ok(records
            .get(&(project_name.to_string(), location.to_string()))
            .cloned())
    }

    fn upsert(&self, record: InventoryRecord) -> Result<(), StoreError> {
        let mut records = self.locked()?;
        let key = (record.project_name.clone(), record.location.clone());
        records.insert(key, record);
        Ok(())
    }

    fn scan(&self) -> Result<Vec<InventoryRecord>, StoreError> {
        Ok(self.locked()?.values().cloned().collect())
    }
}
