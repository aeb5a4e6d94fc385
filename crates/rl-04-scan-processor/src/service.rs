//! # Scan Processor Service

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::ports::outbound::BeneficiaryDirectory;
use rl_01_identity_resolver::resolve;
use rl_02_distribution_ledger::{LedgerApi, RecordOutcome};
use shared_types::{
    DistributionTransaction, ScanContext, ScanOutcome, TimeSource, TransactionStatus,
};

/// Processes scan events: one call, one classified terminal outcome.
pub struct ScanProcessor {
    directory: Arc<dyn BeneficiaryDirectory>,
    ledger: Arc<dyn LedgerApi>,
    time: Arc<dyn TimeSource>,
}

impl ScanProcessor {
    pub fn new(
        directory: Arc<dyn BeneficiaryDirectory>,
        ledger: Arc<dyn LedgerApi>,
        time: Arc<dyn TimeSource>,
    ) -> Self {
        Self {
            directory,
            ledger,
            time,
        }
    }

    /// Processes one scan event.
    ///
    /// On `Success` exactly one `DistributionTransaction` has been
    /// appended; every other outcome leaves the ledger untouched. Never
    /// panics and never returns early with an unclassified fault.
    pub fn process(&self, raw_payload: &str, ctx: &ScanContext) -> ScanOutcome {
        let beneficiary_id = match resolve(raw_payload) {
            Ok(id) => id,
            Err(e) => {
                // User-correctable, not a system fault
                debug!(project = %ctx.project_name, error = %e, "unresolvable scan payload");
                return ScanOutcome::InvalidPayload;
            }
        };

        let profile = match self.directory.get(&beneficiary_id) {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                warn!(
                    beneficiary = %beneficiary_id,
                    project = %ctx.project_name,
                    "scanned identifier not in directory"
                );
                return ScanOutcome::UnknownBeneficiary;
            }
            Err(e) => {
                error!(beneficiary = %beneficiary_id, error = %e, "directory lookup failed");
                return ScanOutcome::SystemError {
                    detail: e.to_string(),
                };
            }
        };

        let name = profile.display_name();
        let tx = DistributionTransaction {
            beneficiary_id,
            beneficiary_name: name.clone(),
            project_name: ctx.project_name.clone(),
            location: ctx.location.clone(),
            distributor: ctx.distributor.clone(),
            timestamp: self.time.now(),
            status: TransactionStatus::Distributed,
        };

        match self.ledger.record_if_absent(tx) {
            Ok(RecordOutcome::Inserted) => {
                info!(
                    name = %name,
                    project = %ctx.project_name,
                    location = %ctx.location,
                    distributor = %ctx.distributor,
                    "aid issued"
                );
                ScanOutcome::Success { name }
            }
            Ok(RecordOutcome::AlreadyExists(existing)) => ScanOutcome::Duplicate {
                name: existing.beneficiary_name,
                location: existing.location,
                distributor: existing.distributor,
                timestamp: existing.timestamp,
            },
            Err(e) => {
                error!(error = %e, "ledger record failed");
                ScanOutcome::SystemError {
                    detail: e.to_string(),
                }
            }
        }
    }
}
