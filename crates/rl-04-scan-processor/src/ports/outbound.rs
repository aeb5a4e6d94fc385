//! # Outbound Port - BeneficiaryDirectory
//!
//! The directory is an external system with an unknown, variable profile
//! schema. The core needs exactly two queries from it.

use std::collections::BTreeSet;

use shared_types::{BeneficiaryId, BeneficiaryProfile};

/// Directory lookup failure. Always a system fault (the directory being
/// reachable but missing a profile is `Ok(None)`, not an error).
#[derive(Debug, Clone)]
pub struct DirectoryError {
    pub message: String,
}

impl std::fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Directory unavailable: {}", self.message)
    }
}

impl std::error::Error for DirectoryError {}

/// External beneficiary directory.
pub trait BeneficiaryDirectory: Send + Sync {
    /// Fetches the profile for an identifier, `None` if unregistered.
    fn get(&self, id: &BeneficiaryId) -> Result<Option<BeneficiaryProfile>, DirectoryError>;

    /// Distinct text values of the first profile field whose NAME matches
    /// the predicate. Profiles lacking the field contribute nothing.
    ///
    /// The predicate works on field names because the schema is variable:
    /// callers know what a field is called approximately ("surveyor",
    /// "scanner", ...), not exactly.
    fn distinct_values(
        &self,
        field_predicate: &dyn Fn(&str) -> bool,
    ) -> Result<BTreeSet<String>, DirectoryError>;
}
