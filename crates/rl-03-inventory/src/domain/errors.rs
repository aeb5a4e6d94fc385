//! Inventory error types.

use rl_02_distribution_ledger::LedgerError;
use shared_types::StoreError;

/// Inventory operation failure.
#[derive(Debug, Clone)]
pub enum InventoryError {
    /// The stock store is unavailable. Retryable.
    StoreUnavailable { message: String },

    /// A persisted stock record could not be decoded.
    CorruptRecord { message: String },

    /// The issued-count source (the transaction ledger) failed.
    CounterUnavailable { message: String },
}

impl std::fmt::Display for InventoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InventoryError::StoreUnavailable { message } => {
                write!(f, "Inventory store unavailable: {}", message)
            }
            InventoryError::CorruptRecord { message } => {
                write!(f, "Corrupt inventory record: {}", message)
            }
            InventoryError::CounterUnavailable { message } => {
                write!(f, "Issued-count source unavailable: {}", message)
            }
        }
    }
}

impl std::error::Error for InventoryError {}

impl From<StoreError> for InventoryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Corruption { message } => InventoryError::CorruptRecord { message },
            StoreError::Io { message } | StoreError::Locked { message } => {
                InventoryError::StoreUnavailable { message }
            }
        }
    }
}

impl From<LedgerError> for InventoryError {
    fn from(err: LedgerError) -> Self {
        InventoryError::CounterUnavailable {
            message: err.to_string(),
        }
    }
}
