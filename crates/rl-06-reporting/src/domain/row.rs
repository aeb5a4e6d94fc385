//! Report rows and filters.

use serde_json::Value;

use rl_02_distribution_ledger::LedgerQuery;
use shared_types::{BeneficiaryProfile, DistributionTransaction, TransactionStatus};

/// Directory fields never shown on reports: internal ids and raw code blobs.
const HIDDEN_PROFILE_FIELDS: [&str; 2] = ["_id", "qr_code"];

/// One report row: a ledger transaction plus the beneficiary's directory
/// profile, when the directory still has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub transaction: DistributionTransaction,
    /// `None` when the beneficiary is no longer in the directory. The row
    /// itself is never dropped for that reason.
    pub profile: Option<BeneficiaryProfile>,
}

impl ReportRow {
    /// Flattens the row into ordered `(column, value)` pairs for export.
    ///
    /// Transaction columns come first in a fixed order, then the profile's
    /// fields in directory order. Internal directory fields and `"nan"`
    /// placeholders are omitted.
    pub fn flatten(&self) -> Vec<(String, String)> {
        let tx = &self.transaction;
        let mut columns = vec![
            ("beneficiary_id".to_string(), tx.beneficiary_id.to_string()),
            ("beneficiary_name".to_string(), tx.beneficiary_name.clone()),
            ("project_name".to_string(), tx.project_name.clone()),
            ("location".to_string(), tx.location.clone()),
            ("distributor".to_string(), tx.distributor.clone()),
            ("timestamp".to_string(), tx.timestamp.to_string()),
            ("status".to_string(), status_label(tx.status).to_string()),
        ];

        if let Some(profile) = &self.profile {
            for (field, value) in profile.fields() {
                if HIDDEN_PROFILE_FIELDS.contains(&field.as_str()) {
                    continue;
                }
                if let Some(text) = render_value(value) {
                    columns.push((field.clone(), text));
                }
            }
        }

        columns
    }
}

fn status_label(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Distributed => "Distributed",
    }
}

/// Renders a profile value as report text. Spreadsheet `"nan"` placeholders
/// and JSON nulls read as absent.
fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.eq_ignore_ascii_case("nan") => None,
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Filter for report generation.
///
/// Ledger columns filter before the join; the optional profile field
/// matches after it, against the directory record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub ledger: LedgerQuery,
    /// `(field, value)` equality on the joined profile. Rows without a
    /// profile, or without the field, do not match.
    pub profile_field: Option<(String, String)>,
}

impl ReportFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project(mut self, name: &str) -> Self {
        self.ledger = self.ledger.project(name);
        self
    }

    pub fn location(mut self, name: &str) -> Self {
        self.ledger = self.ledger.location(name);
        self
    }

    pub fn distributor(mut self, name: &str) -> Self {
        self.ledger = self.ledger.distributor(name);
        self
    }

    pub fn profile_field(mut self, field: &str, value: &str) -> Self {
        self.profile_field = Some((field.to_string(), value.to_string()));
        self
    }

    /// Applies the post-join profile criterion to one row.
    pub fn matches_profile(&self, profile: Option<&BeneficiaryProfile>) -> bool {
        match &self.profile_field {
            None => true,
            Some((field, value)) => profile
                .and_then(|p| p.get_text(field))
                .is_some_and(|text| text == value),
        }
    }
}
