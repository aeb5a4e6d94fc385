//! # Report Engine Service

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{ReportError, ReportFilter, ReportRow};
use rl_02_distribution_ledger::LedgerApi;
use rl_04_scan_processor::BeneficiaryDirectory;
use std::collections::BTreeSet;

/// Builds filtered, profile-enriched views over the ledger.
pub struct ReportEngine {
    ledger: Arc<dyn LedgerApi>,
    directory: Arc<dyn BeneficiaryDirectory>,
}

impl ReportEngine {
    pub fn new(ledger: Arc<dyn LedgerApi>, directory: Arc<dyn BeneficiaryDirectory>) -> Self {
        Self { ledger, directory }
    }

    /// Generates the report for a filter.
    ///
    /// Queries the ledger, then left-joins each row's beneficiary profile
    /// from the directory. A missing profile, or a per-row lookup failure,
    /// yields a row with `profile: None`; the ledger row itself is never
    /// dropped. Only the optional profile-field criterion can exclude rows
    /// after the join.
    pub fn report(&self, filter: &ReportFilter) -> Result<Vec<ReportRow>, ReportError> {
        let transactions = self.ledger.query(&filter.ledger)?;
        debug!(rows = transactions.len(), "ledger query matched");

        let mut rows = Vec::with_capacity(transactions.len());
        for transaction in transactions {
            let profile = match self.directory.get(&transaction.beneficiary_id) {
                Ok(profile) => profile,
                Err(e) => {
                    warn!(
                        beneficiary = %transaction.beneficiary_id,
                        error = %e,
                        "profile lookup failed, emitting bare row"
                    );
                    None
                }
            };
            if !filter.matches_profile(profile.as_ref()) {
                continue;
            }
            rows.push(ReportRow {
                transaction,
                profile,
            });
        }

        info!(rows = rows.len(), "report generated");
        Ok(rows)
    }

    /// Distinct values of directory fields selected by `field_matches`,
    /// sorted. Populates filter dropdowns (e.g. every field whose name
    /// contains "village").
    pub fn registrar_values(
        &self,
        field_matches: &dyn Fn(&str) -> bool,
    ) -> Result<BTreeSet<String>, ReportError> {
        Ok(self.directory.distinct_values(field_matches)?)
    }
}
