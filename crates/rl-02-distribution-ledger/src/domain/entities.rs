//! Ledger domain value objects.

use shared_types::DistributionTransaction;

/// Result of an idempotent record attempt through the inbound port.
///
/// A conflict is an expected, frequent, first-class outcome, never an
/// error. The existing row is returned whole so callers can show the
/// original scan's provenance (who, where, when).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// This call created the row.
    Inserted,
    /// A row for this `(beneficiary, project)` pair already existed.
    AlreadyExists(Box<DistributionTransaction>),
}

impl RecordOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, RecordOutcome::Inserted)
    }
}

/// Result of an atomic insert at the storage layer.
///
/// Distinct from [`RecordOutcome`] so adapters stay decoupled from the
/// inbound API surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertResult {
    Inserted,
    /// The store's uniqueness constraint rejected the insert; carries the
    /// row that holds the key.
    Conflict(Box<DistributionTransaction>),
}

/// Filters for ledger queries. All fields are conjunctive; `None` matches
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerQuery {
    pub project_name: Option<String>,
    pub location: Option<String>,
    pub distributor: Option<String>,
}

impl LedgerQuery {
    pub fn project(mut self, project_name: impl Into<String>) -> Self {
        self.project_name = Some(project_name.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn distributor(mut self, distributor: impl Into<String>) -> Self {
        self.distributor = Some(distributor.into());
        self
    }

    /// Whether a transaction satisfies every set filter.
    pub fn matches(&self, tx: &DistributionTransaction) -> bool {
        self.project_name
            .as_deref()
            .map_or(true, |p| tx.project_name == p)
            && self.location.as_deref().map_or(true, |l| tx.location == l)
            && self
                .distributor
                .as_deref()
                .map_or(true, |d| tx.distributor == d)
    }
}
