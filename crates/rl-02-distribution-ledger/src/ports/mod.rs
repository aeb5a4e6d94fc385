//! Ports layer: inbound API trait and outbound storage trait.

pub mod inbound;
pub mod outbound;

pub use inbound::LedgerApi;
pub use outbound::TransactionStore;
