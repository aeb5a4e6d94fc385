//! # Inventory Ledger Subsystem
//!
//! **Subsystem ID:** 3
//!
//! ## Purpose
//!
//! Tracks the configured stock quantity per `(project, location)` and
//! derives remaining stock from transaction ledger counts.
//!
//! Two rules keep this layer honest:
//!
//! - `initial_quantity` is a capacity ceiling set by an operator, never a
//!   counter. Nothing auto-increments it.
//! - `remaining` is computed fresh on every call from the transaction
//!   ledger, with no cached counters that could drift from the source of
//!   truth. Negative remaining signals over-issuance and is returned
//!   as-is, never clamped.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{FileInventoryStore, InMemoryInventoryStore};
pub use domain::InventoryError;
pub use ports::inbound::InventoryApi;
pub use ports::outbound::{InventoryStore, IssuedCounter, LedgerIssuedCounter};
pub use service::InventoryService;
