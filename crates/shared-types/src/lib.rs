//! # Shared Types Crate
//!
//! Cross-subsystem entities for the Relief-Ledger workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every type that crosses a subsystem
//!   boundary (ledger rows, scan outcomes, beneficiary profiles) is defined
//!   here, never duplicated per crate.
//! - **Snapshot over reference**: `DistributionTransaction` carries the
//!   beneficiary name as a denormalized copy so the audit trail stays
//!   accurate even if the directory record changes later.
//! - **Append-only ledger rows**: nothing in this crate exposes mutation of
//!   a recorded transaction.

pub mod entities;
pub mod errors;
pub mod outcomes;
pub mod profile;
pub mod time;

pub use entities::*;
pub use errors::*;
pub use outcomes::*;
pub use profile::BeneficiaryProfile;
pub use time::{MockTimeSource, SystemTimeSource, TimeSource};
