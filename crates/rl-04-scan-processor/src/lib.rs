//! # Scan Processor Subsystem
//!
//! **Subsystem ID:** 4
//!
//! ## Purpose
//!
//! Orchestrates one scan event end to end: resolve identity, look up the
//! beneficiary, record the distribution exactly once, and classify the
//! result.
//!
//! ## State machine (terminal states only)
//!
//! ```text
//! raw text ──resolve──→ InvalidPayload
//!              │
//!              └──directory lookup──→ UnknownBeneficiary
//!                         │
//!                         └──record_if_absent──→ Success
//!                                    │
//!                                    └──→ Duplicate (with provenance)
//! ```
//!
//! Every call is independent and safe to run concurrently with others;
//! correctness is delegated to the ledger's storage-enforced uniqueness,
//! not to any locking here. Per-scan faults classify as `SystemError` and
//! never propagate as panics.

pub mod adapters;
pub mod ports;
pub mod service;

pub use adapters::InMemoryDirectory;
pub use ports::outbound::{BeneficiaryDirectory, DirectoryError};
pub use service::ScanProcessor;
