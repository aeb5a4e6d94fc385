//! # Inbound Port - LedgerApi
//!
//! Primary driving port exposing the transaction ledger.
//!
//! Callers: the Scan Processor (record/lookup), the Inventory Ledger
//! (counting), and the Reporting Engine (filtered queries).

use crate::domain::{LedgerError, LedgerQuery, RecordOutcome};
use shared_types::{BeneficiaryId, DistributionTransaction};

/// Primary API for the Transaction Ledger.
///
/// All methods take `&self`; implementations are `Send + Sync` so scan
/// terminals can share one handle across threads. Per-pair serialization is
/// the storage adapter's job, not the caller's.
pub trait LedgerApi: Send + Sync {
    /// Records a distribution if no row exists for the transaction's
    /// `(beneficiary_id, project_name)` pair.
    ///
    /// Atomic: for any number of concurrent callers on the same pair,
    /// exactly one receives `Inserted`; the rest receive `AlreadyExists`
    /// with the winning row.
    ///
    /// # Errors
    /// `StoreUnavailable` (retryable) or `CorruptRow`. A conflict is never
    /// an error.
    fn record_if_absent(
        &self,
        tx: DistributionTransaction,
    ) -> Result<RecordOutcome, LedgerError>;

    /// Looks up the existing row for a pair, if any. Used to show duplicate
    /// provenance to operators.
    fn find_existing(
        &self,
        beneficiary_id: &BeneficiaryId,
        project_name: &str,
    ) -> Result<Option<DistributionTransaction>, LedgerError>;

    /// Counts rows at a `(project, location)`. The Inventory Ledger derives
    /// remaining stock from this, fresh on every call.
    fn count_by(&self, project_name: &str, location: &str) -> Result<u64, LedgerError>;

    /// Returns all rows matching the query, in store order.
    fn query(&self, query: &LedgerQuery) -> Result<Vec<DistributionTransaction>, LedgerError>;
}
