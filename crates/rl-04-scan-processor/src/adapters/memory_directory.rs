//! In-memory beneficiary directory.
//!
//! Reference adapter backed by a `HashMap`, used by unit tests across the
//! workspace and by single-box demos. Production deployments implement
//! `BeneficiaryDirectory` against the real directory service.

use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

use crate::ports::outbound::{BeneficiaryDirectory, DirectoryError};
use shared_types::{BeneficiaryId, BeneficiaryProfile};

/// In-memory directory of beneficiary profiles.
#[derive(Default)]
pub struct InMemoryDirectory {
    profiles: Mutex<HashMap<BeneficiaryId, BeneficiaryProfile>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) a profile.
    pub fn insert(&self, id: BeneficiaryId, profile: BeneficiaryProfile) {
        if let Ok(mut profiles) = self.profiles.lock() {
            profiles.insert(id, profile);
        }
    }
}

impl BeneficiaryDirectory for InMemoryDirectory {
    fn get(&self, id: &BeneficiaryId) -> Result<Option<BeneficiaryProfile>, DirectoryError> {
        let profiles = self.profiles.lock().map_err(|_| DirectoryError {
            message: "directory mutex poisoned".to_string(),
        })?;
        Ok(profiles.get(id).cloned())
    }

    fn distinct_values(
        &self,
        field_predicate: &dyn Fn(&str) -> bool,
    ) -> Result<BTreeSet<String>, DirectoryError> {
        let profiles = self.profiles.lock().map_err(|_| DirectoryError {
            message: "directory mutex poisoned".to_string(),
        })?;

        // Pick one matching field name deterministically, then collect its
        // values across every profile (the schema is variable, but one
        // logical column is being asked about).
        let field = profiles
            .values()
            .flat_map(|p| p.fields().map(|(name, _)| name.clone()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .find(|name| field_predicate(name));

        let Some(field) = field else {
            return Ok(BTreeSet::new());
        };

        Ok(profiles
            .values()
            .filter_map(|p| p.get_text(&field).map(str::to_string))
            .collect())
    }
}
