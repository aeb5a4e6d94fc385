//! Inventory domain layer.

pub mod errors;

pub use errors::InventoryError;
