//! File-backed stock store.
//!
//! One JSON document holding every stock record, rewritten atomically
//! (temp file + rename) under an exclusive `fs2` flock. Stock updates are
//! rare operator actions, so rewrite-on-upsert costs nothing in practice
//! and keeps the file trivially inspectable.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::ports::outbound::InventoryStore;
use shared_types::{InventoryRecord, StoreError};

/// Durable stock store: one JSON file plus a sidecar lock file.
pub struct FileInventoryStore {
    stock_path: PathBuf,
    lock_path: PathBuf,
}

struct StockLock {
    _file: File,
}

impl FileInventoryStore {
    const STOCK_FILE: &'static str = "inventory.json";
    const LOCK_FILE: &'static str = "inventory.LOCK";

    /// Opens (creating if needed) a store rooted at `data_dir`.
    pub fn open(data_dir: &Path) -> Result<Self, StoreError> {
        std::fs::create_dir_all(data_dir).map_err(io_err)?;
        Ok(Self {
            stock_path: data_dir.join(Self::STOCK_FILE),
            lock_path: data_dir.join(Self::LOCK_FILE),
        })
    }

    fn lock(&self, exclusive: bool) -> Result<StockLock, StoreError> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(&self.lock_path)
            .map_err(io_err)?;
        let acquired = if exclusive {
            file.lock_exclusive()
        } else {
            file.lock_shared()
        };
        acquired.map_err(|e| StoreError::Locked {
            message: format!("{}: {}", self.lock_path.display(), e),
        })?;
        Ok(StockLock { _file: file })
    }

    fn read_records(&self) -> Result<Vec<InventoryRecord>, StoreError> {
        let raw = match std::fs::read_to_string(&self.stock_path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_err(e)),
        };
        serde_json::from_str(&raw).map_err(|e| StoreError::Corruption {
            message: format!("{}: {}", self.stock_path.display(), e),
        })
    }

    fn write_records(&self, records: &[InventoryRecord]) -> Result<(), StoreError> {
        let encoded =
            serde_json::to_string_pretty(records).map_err(|e| StoreError::Corruption {
                message: e.to_string(),
            })?;
        let tmp_path = self.stock_path.with_extension("json.tmp");
        let mut tmp = File::create(&tmp_path).map_err(io_err)?;
        tmp.write_all(encoded.as_bytes()).map_err(io_err)?;
        tmp.sync_all().map_err(io_err)?;
        std::fs::rename(&tmp_path, &self.stock_path).map_err(io_err)?;
        Ok(())
    }
}

impl InventoryStore for FileInventoryStore {
    fn get(
        &self,
        project_name: &str,
        location: &str,
    ) -> Result<Option<InventoryRecord>, StoreError> {
        let _guard = self.lock(false)?;
        Ok(self
            .read_records()?
            .into_iter()
            .find(|r| r.project_name == project_name && r.location == location))
    }

    fn upsert(&self, record: InventoryRecord) -> Result<(), StoreError> {
        let _guard = self.lock(true)?;
        let mut records = self.read_records()?;
        records.retain(|r| {
            !(r.project_name == record.project_name && r.location == record.location)
        });
        records.push(record);
        self.write_records(&records)
    }

    fn scan(&self) -> Result<Vec<InventoryRecord>, StoreError> {
        let _guard = self.lock(false)?;
        self.read_records()
    }
}

fn io_err(e: std::io::Error) -> StoreError {
    StoreError::Io {
        message: e.to_string(),
    }
}
