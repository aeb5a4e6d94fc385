//! # File-backed transaction store
//!
//! Append-only JSON-lines journal guarded by an `fs2` file lock. This is
//! the production adapter for multiple scan terminals sharing one volume:
//! the exclusive flock makes the presence-check-plus-append atomic across
//! independent processes, which is what turns the journal into a
//! compound-unique index.
//!
//! Layout inside the data directory:
//!
//! ```text
//! transactions.jsonl   one DistributionTransaction per line, append-only
//! LOCK                 flock target (exclusive for writes, shared for reads)
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use crate::domain::InsertResult;
use crate::ports::outbound::TransactionStore;
use shared_types::{DistributionTransaction, StoreError, TransactionKey};

/// Durable transaction store: JSON-lines journal plus a sidecar lock file.
pub struct FileTransactionStore {
    journal_path: PathBuf,
    lock_path: PathBuf,
}

/// Held flock on the journal. Released when dropped (closing the
/// descriptor releases the lock).
struct JournalLock {
    _file: File,
}

impl FileTransactionStore {
    const JOURNAL_FILE: &'static str = "transactions.jsonl";
    const LOCK_FILE: &'static str = "LOCK";

    /// Opens (creating if needed) a store rooted at `data_dir`.
    ///
    /// # Errors
    /// `StoreError::Io` if the directory cannot be created.
    pub fn open(data_dir: &Path) -> Result<Self, StoreError> {
        std::fs::create_dir_all(data_dir).map_err(io_err)?;
        Ok(Self {
            journal_path: data_dir.join(Self::JOURNAL_FILE),
            lock_path: data_dir.join(Self::LOCK_FILE),
        })
    }

    /// Acquires the journal lock, blocking until available.
    fn lock(&self, exclusive: bool) -> Result<JournalLock, StoreError> {
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
        Ok(JournalLock { _file: file })
    }

    /// Reads every journal row. Caller must hold the lock.
    fn read_rows(&self) -> Result<Vec<DistributionTransaction>, StoreError> {
        let file = match File::open(&self.journal_path) {
            Ok(f) => f,
            // Journal not written yet: empty store
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_err(e)),
        };

        let mut rows = Vec::new();
        for (line_no, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(io_err)?;
            if line.trim().is_empty() {
                continue;
            }
            let tx = serde_json::from_str(&line).map_err(|e| StoreError::Corruption {
                message: format!(
                    "{} line {}: {}",
                    self.journal_path.display(),
                    line_no + 1,
                    e
                ),
            })?;
            rows.push(tx);
        }
        Ok(rows)
    }

    /// Appends one row and flushes it to disk. Caller must hold the
    /// exclusive lock.
    fn append_row(&self, tx: &DistributionTransaction) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(tx).map_err(|e| StoreError::Corruption {
            message: e.to_string(),
        })?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.journal_path)
            .map_err(io_err)?;
        writeln!(file, "{}", encoded).map_err(io_err)?;
        file.sync_all().map_err(io_err)?;
        Ok(())
    }
}

impl TransactionStore for FileTransactionStore {
    fn insert_if_absent(
        &self,
        tx: DistributionTransaction,
    ) -> Result<InsertResult, StoreError> {
        // Exclusive lock covers the re-read AND the append: no other
        // process can insert between the presence check and the write.
        let _guard = self.lock(true)?;

        let key = tx.key();
        let rows = self.read_rows()?;
        if let Some(existing) = rows.into_iter().find(|row| row.key() == key) {
            return Ok(InsertResult::Conflict(Box::new(existing)));
        }

        self.append_row(&tx)?;
        debug!(
            beneficiary = %tx.beneficiary_id,
            project = %tx.project_name,
            "journal row appended"
        );
        Ok(InsertResult::Inserted)
    }

    fn get(&self, key: &TransactionKey) -> Result<Option<DistributionTransaction>, StoreError> {
        let _guard = self.lock(false)?;
        Ok(self.read_rows()?.into_iter().find(|row| &row.key() == key))
    }

    fn scan(&self) -> Result<Vec<DistributionTransaction>, StoreError> {
        let _guard = self.lock(false)?;
        self.read_rows()
    }
}

fn io_err(e: std::io::Error) -> StoreError {
    StoreError::Io {
        message: e.to_string(),
    }
}
