//! Ports layer: inventory API, stock store, and issued-count source.

pub mod inbound;
pub mod outbound;

pub use inbound::InventoryApi;
pub use outbound::{InventoryStore, IssuedCounter, LedgerIssuedCounter};
