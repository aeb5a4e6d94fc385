//! # Scan Outcomes
//!
//! The classified result of processing one scan event. Outcomes are
//! transient: consumed immediately by the caller (terminal UI or a batch
//! report row), never persisted.

use crate::entities::Timestamp;

/// Terminal result of one scan event.
///
/// Every scan yields exactly one of these; per-scan problems are classified
/// here instead of propagating as faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Aid recorded; carries the beneficiary's display name for the
    /// operator's confirmation screen.
    Success { name: String },

    /// This beneficiary already received aid for this project. Carries the
    /// original scan's full provenance so the operator can recognize
    /// attempted double-issuance.
    Duplicate {
        name: String,
        location: String,
        distributor: String,
        timestamp: Timestamp,
    },

    /// The identifier is well-formed but absent from the directory.
    UnknownBeneficiary,

    /// The scanned text does not contain a valid identifier.
    /// User-correctable; not a system fault.
    InvalidPayload,

    /// Storage or directory failure. Retryable; the scan had no effect.
    SystemError { detail: String },
}

impl ScanOutcome {
    /// Returns true if a ledger row was appended by this scan.
    pub fn is_success(&self) -> bool {
        matches!(self, ScanOutcome::Success { .. })
    }

    /// Returns true if the scan hit the ledger's uniqueness constraint.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, ScanOutcome::Duplicate { .. })
    }
}
