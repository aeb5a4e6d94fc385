//! # Transaction Ledger Subsystem
//!
//! **Subsystem ID:** 2
//!
//! ## Purpose
//!
//! The correctness-critical core of the system: an append-only record of
//! who received aid, with at most one row per `(beneficiary_id,
//! project_name)` pair for the lifetime of the system.
//!
//! ## The uniqueness contract
//!
//! `record_if_absent` is atomic. Concurrent callers racing on the same
//! pair yield exactly one `Inserted`; every other caller gets
//! `AlreadyExists` with the winning row. The constraint is enforced inside
//! the storage adapter (one lock acquisition per insert), never by a
//! read-then-write check in application code, which would race under
//! concurrent writers.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! adapters/  - InMemoryTransactionStore, FileTransactionStore (fs2 flock)
//! ports/     - LedgerApi (inbound), TransactionStore (outbound)
//! domain/    - RecordOutcome, LedgerQuery, LedgerError
//! service.rs - LedgerService: LedgerApi over any TransactionStore
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{FileTransactionStore, InMemoryTransactionStore};
pub use domain::{InsertResult, LedgerError, LedgerQuery, RecordOutcome};
pub use ports::inbound::LedgerApi;
pub use ports::outbound::TransactionStore;
pub use service::LedgerService;
