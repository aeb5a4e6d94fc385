//! Reporting error taxonomy.

use rl_02_distribution_ledger::LedgerError;
use rl_04_scan_processor::DirectoryError;

/// Faults surfaced by report generation.
///
/// Reports are read-only; every variant is retryable without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// The ledger could not be read.
    LedgerUnavailable { message: String },

    /// The beneficiary directory could not be read.
    DirectoryUnavailable { message: String },
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::LedgerUnavailable { message } => {
                write!(f, "Ledger unavailable: {}", message)
            }
            ReportError::DirectoryUnavailable { message } => {
                write!(f, "Directory unavailable: {}", message)
            }
        }
    }
}

impl std::error::Error for ReportError {}

impl From<LedgerError> for ReportError {
    fn from(e: LedgerError) -> Self {
        ReportError::LedgerUnavailable {
            message: e.to_string(),
        }
    }
}

impl From<DirectoryError> for ReportError {
    fn from(e: DirectoryError) -> Self {
        ReportError::DirectoryUnavailable {
            message: e.message,
        }
    }
}
