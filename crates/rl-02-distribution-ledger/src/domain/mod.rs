//! Inner domain layer: outcomes, queries, and errors for the ledger.

pub mod entities;
pub mod errors;

pub use entities::{InsertResult, LedgerQuery, RecordOutcome};
pub use errors::LedgerError;
