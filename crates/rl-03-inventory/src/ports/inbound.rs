//! # Inbound Port - InventoryApi

use crate::domain::InventoryError;
use shared_types::InventoryStatus;

/// Primary API for the Inventory Ledger.
pub trait InventoryApi: Send + Sync {
    /// Sets the stock ceiling for a `(project, location)`. Last write wins;
    /// stamps the record's `last_updated`.
    ///
    /// Creates the record on first set. Only explicit operator action goes
    /// through here; nothing in the scan path mutates stock.
    fn set_stock(
        &self,
        project_name: &str,
        location: &str,
        quantity: u64,
    ) -> Result<(), InventoryError>;

    /// Returns the configured stock, or 0 when never set. "Unset" and
    /// "explicitly zero" are indistinguishable here; use `status` when the
    /// caller needs to tell them apart.
    fn get_stock(&self, project_name: &str, location: &str) -> Result<u64, InventoryError>;

    /// Remaining stock: configured quantity minus issued count, computed
    /// fresh from the transaction ledger on every call. May be negative
    /// (over-issuance); advisory only, never blocks a scan.
    fn remaining(&self, project_name: &str, location: &str) -> Result<i64, InventoryError>;

    /// Full derived view: configured flag, ceiling, issued count, and
    /// remaining, from one count query.
    fn status(
        &self,
        project_name: &str,
        location: &str,
    ) -> Result<InventoryStatus, InventoryError>;
}
