//! # Core Domain Entities
//!
//! Defines the entities shared across subsystems.
//!
//! ## Clusters
//!
//! - **Identity**: `BeneficiaryId`
//! - **Ledger**: `DistributionTransaction`, `TransactionKey`, `TransactionStatus`
//! - **Inventory**: `InventoryRecord`, `InventoryStatus`
//! - **Ingestion**: `PageImage`, `ScanContext`

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::IdParseError;

/// Timestamp in milliseconds since UNIX epoch.
pub type Timestamp = u64;

/// Canonical beneficiary identifier: 24 lowercase hex characters, the
/// directory's content-addressed document key.
///
/// The core never mints one; identifiers are assigned externally when a
/// profile is registered. `parse` is the only way to construct a value, so
/// a `BeneficiaryId` in hand is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BeneficiaryId(String);

impl BeneficiaryId {
    /// Fixed identifier length for the directory's key scheme.
    pub const LEN: usize = 24;

    /// Parses and validates a raw identifier string.
    ///
    /// # Errors
    /// - `WrongLength` if the input is not exactly 24 characters
    /// - `NonHex` if any character is outside `[0-9a-fA-F]`
    pub fn parse(raw: &str) -> Result<Self, IdParseError> {
        if raw.len() != Self::LEN {
            return Err(IdParseError::WrongLength {
                expected: Self::LEN,
                actual: raw.len(),
            });
        }
        if let Some(found) = raw.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(IdParseError::NonHex { found });
        }
        Ok(Self(raw.to_ascii_lowercase()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BeneficiaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for BeneficiaryId {
    type Error = IdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BeneficiaryId> for String {
    fn from(id: BeneficiaryId) -> Self {
        id.0
    }
}

/// Status of a recorded distribution.
///
/// Single variant today; an enum so the journal format survives future
/// statuses (e.g. voided rows) without a migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TransactionStatus {
    /// Aid was handed out.
    #[default]
    Distributed,
}

/// The ledger's unit of record: one aid handout to one beneficiary for one
/// project.
///
/// At most one transaction may exist per `(beneficiary_id, project_name)`
/// pair, for the lifetime of the system. Rows are created exactly once by
/// the Scan Processor, never mutated, never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionTransaction {
    /// Canonical beneficiary identifier.
    pub beneficiary_id: BeneficiaryId,
    /// Denormalized name snapshot taken at scan time, NOT a live directory
    /// reference. Protects historical accuracy if the profile changes.
    pub beneficiary_name: String,
    /// Project this handout belongs to.
    pub project_name: String,
    /// Physical location of the handout.
    pub location: String,
    /// Staff member who performed the handout.
    pub distributor: String,
    /// When the handout was recorded (ms).
    pub timestamp: Timestamp,
    /// Distribution status.
    pub status: TransactionStatus,
}

impl DistributionTransaction {
    /// Returns the compound uniqueness key for this row.
    pub fn key(&self) -> TransactionKey {
        TransactionKey {
            beneficiary_id: self.beneficiary_id.clone(),
            project_name: self.project_name.clone(),
        }
    }
}

/// Compound key carrying the ledger's uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionKey {
    pub beneficiary_id: BeneficiaryId,
    pub project_name: String,
}

/// Configured stock for one `(project, location)` pair.
///
/// `initial_quantity` is a capacity ceiling set by an operator, never a
/// counter: it is only changed by explicit operator action. Issued counts
/// are derived from the transaction ledger at query time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub project_name: String,
    pub location: String,
    /// Operator-set stock quantity (last write wins).
    pub initial_quantity: u64,
    /// When the quantity was last set (ms).
    pub last_updated: Timestamp,
}

/// Derived inventory view for one `(project, location)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStatus {
    /// Whether a stock record exists at all. `initial_quantity` is 0 either
    /// way when unset, so this is the only way to tell "never configured"
    /// from "explicitly zero".
    pub configured: bool,
    /// Configured capacity (0 if unset).
    pub initial_quantity: u64,
    /// Count of ledger rows at this project/location.
    pub issued_count: u64,
    /// `initial_quantity - issued_count`. Negative means over-issuance and
    /// must be surfaced, never clamped.
    pub remaining: i64,
}

/// One rasterized document page, as produced by the external rasterizer.
///
/// Opaque to the core: only the external decoder interprets the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    pub bytes: Vec<u8>,
}

impl PageImage {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

/// Where and by whom a scan is being performed.
///
/// Always an explicit call-site parameter, never ambient session state, so
/// concurrent terminals cannot leak configuration into each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanContext {
    pub project_name: String,
    pub location: String,
    pub distributor: String,
}

impl ScanContext {
    pub fn new(
        project_name: impl Into<String>,
        location: impl Into<String>,
        distributor: impl Into<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            location: location.into(),
            distributor: distributor.into(),
        }
    }
}
