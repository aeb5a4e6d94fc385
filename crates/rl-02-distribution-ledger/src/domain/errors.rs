//! Ledger error types.
//!
//! A uniqueness conflict is NOT represented here: it is a domain outcome
//! (`RecordOutcome::AlreadyExists`), never an error.

use shared_types::StoreError;

/// Ledger operation failure.
#[derive(Debug, Clone)]
pub enum LedgerError {
    /// The backing store is unavailable. Retryable by the caller.
    StoreUnavailable { message: String },

    /// A persisted row could not be decoded.
    CorruptRow { message: String },
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::StoreUnavailable { message } => {
                write!(f, "Ledger store unavailable: {}", message)
            }
            LedgerError::CorruptRow { message } => {
                write!(f, "Corrupt ledger row: {}", message)
            }
        }
    }
}

impl std::error::Error for LedgerError {}

impl From<StoreError> for LedgerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Corruption { message } => LedgerError::CorruptRow { message },
            StoreError::Io { message } | StoreError::Locked { message } => {
                LedgerError::StoreUnavailable { message }
            }
        }
    }
}
