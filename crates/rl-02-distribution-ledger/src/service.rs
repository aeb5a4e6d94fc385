//! # Ledger Service
//!
//! Implements the `LedgerApi` inbound port over any `TransactionStore`.
//! Thin by design: atomicity lives in the store, classification lives here.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{InsertResult, LedgerError, LedgerQuery, RecordOutcome};
use crate::ports::inbound::LedgerApi;
use crate::ports::outbound::TransactionStore;
use shared_types::{BeneficiaryId, DistributionTransaction, TransactionKey};

/// Transaction Ledger service.
pub struct LedgerService<S: TransactionStore> {
    store: Arc<S>,
}

impl<S: TransactionStore> LedgerService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S: TransactionStore> LedgerApi for LedgerService<S> {
    fn record_if_absent(
        &self,
        tx: DistributionTransaction,
    ) -> Result<RecordOutcome, LedgerError> {
        let beneficiary = tx.beneficiary_id.clone();
        let project = tx.project_name.clone();

        match self.store.insert_if_absent(tx)? {
            InsertResult::Inserted => {
                info!(
                    beneficiary = %beneficiary,
                    project = %project,
                    "distribution recorded"
                );
                Ok(RecordOutcome::Inserted)
            }
            InsertResult::Conflict(existing) => {
                debug!(
                    beneficiary = %beneficiary,
                    project = %project,
                    prior_location = %existing.location,
                    prior_distributor = %existing.distributor,
                    "duplicate distribution attempt"
                );
                Ok(RecordOutcome::AlreadyExists(existing))
            }
        }
    }

    fn find_existing(
        &self,
        beneficiary_id: &BeneficiaryId,
        project_name: &str,
    ) -> Result<Option<DistributionTransaction>, LedgerError> {
        let key = TransactionKey {
            beneficiary_id: beneficiary_id.clone(),
            project_name: project_name.to_string(),
        };
        Ok(self.store.get(&key)?)
    }

    fn count_by(&self, project_name: &str, location: &str) -> Result<u64, LedgerError> {
        let rows = self.store.scan()?;
        Ok(rows
            .iter()
            .filter(|tx| tx.project_name == project_name && tx.location == location)
            .count() as u64)
    }

    fn query(&self, query: &LedgerQuery) -> Result<Vec<DistributionTransaction>, LedgerError> {
        let rows = self.store.scan()?;
        Ok(rows.into_iter().filter(|tx| query.matches(tx)).collect())
    }
}
