//! # Beneficiary Profile
//!
//! A directory record with an unknown, variable field set. The directory is
//! an external collaborator; profiles are schemaless JSON objects and the
//! core never assumes more structure than it needs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Display-name field priority. English name variants first, then the
/// legacy bare `Name` column, then the Arabic name.
const NAME_PRIORITY: [&str; 4] = ["enname", "en_name", "Name", "arname"];

/// Fallback shown when no name field is present.
const NAME_FALLBACK: &str = "Beneficiary";

/// One beneficiary record from the external directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct BeneficiaryProfile {
    fields: Map<String, Value>,
}

impl BeneficiaryProfile {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Returns the raw value of a field, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns a field as text, skipping placeholder `"nan"` values that
    /// spreadsheet imports leave behind.
    pub fn get_text(&self, field: &str) -> Option<&str> {
        match self.fields.get(field) {
            Some(Value::String(s)) if !s.eq_ignore_ascii_case("nan") => Some(s),
            _ => None,
        }
    }

    /// Iterates over all fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Best display name for this beneficiary.
    ///
    /// Tries `enname`, `en_name`, `Name`, `arname` in order and falls back
    /// to a fixed placeholder when none is usable.
    pub fn display_name(&self) -> String {
        NAME_PRIORITY
            .iter()
            .find_map(|field| self.get_text(field))
            .unwrap_or(NAME_FALLBACK)
            .to_string()
    }
}
