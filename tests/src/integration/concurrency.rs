//! # Concurrency Races
//!
//! Several scan terminals share one ledger. For any number of concurrent
//! scans of the same `(beneficiary, project)` pair, exactly one commits;
//! the rest see the winner's provenance. No locking in the scan path makes
//! this true; the storage adapter's atomic insert does.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use serde_json::json;

    use rl_02_distribution_ledger::{InMemoryTransactionStore, LedgerService};
    use rl_04_scan_processor::{InMemoryDirectory, ScanProcessor};
    use shared_types::{BeneficiaryId, MockTimeSource, ScanContext, ScanOutcome};

    const THREADS: usize = 8;

    fn processor_with(ids: &[&str]) -> Arc<ScanProcessor> {
        let directory = Arc::new(InMemoryDirectory::new());
        for id in ids {
            directory.insert(
                BeneficiaryId::parse(id).unwrap(),
                serde_json::from_value(json!({"enname": "Fatima"})).unwrap(),
            );
        }
        let ledger = Arc::new(LedgerService::new(Arc::new(InMemoryTransactionStore::new())));
        Arc::new(ScanProcessor::new(
            directory,
            ledger,
            Arc::new(MockTimeSource::new(1000)),
        ))
    }

    #[test]
    fn test_concurrent_same_pair_has_single_winner() {
        let id = "507f1f77bcf86cd799439011";
        let processor = processor_with(&[id]);

        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let processor = processor.clone();
                thread::spawn(move || {
                    let ctx =
                        ScanContext::new("Ramadan", "Warehouse A", &format!("operator-{}", i));
                    processor.process(id, &ctx)
                })
            })
            .collect();

        let outcomes: Vec<ScanOutcome> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();

        let successes = outcomes.iter().filter(|o| o.is_success()).count();
        let duplicates = outcomes.iter().filter(|o| o.is_duplicate()).count();
        assert_eq!(successes, 1);
        assert_eq!(duplicates, THREADS - 1);

        // Every loser saw the winner's row, and they all saw the same one
        let provenance: Vec<&ScanOutcome> =
            outcomes.iter().filter(|o| o.is_duplicate()).collect();
        for dup in &provenance {
            assert_eq!(*dup, provenance[0]);
        }
    }

    #[test]
    fn test_concurrent_distinct_pairs_all_commit() {
        let ids = [
            "507f1f77bcf86cd799439011",
            "507f1f77bcf86cd799439012",
            "507f1f77bcf86cd799439013",
            "507f1f77bcf86cd799439014",
        ];
        let processor = processor_with(&ids);

        let handles: Vec<_> = ids
            .iter()
            .map(|id| {
                let processor = processor.clone();
                let id = id.to_string();
                thread::spawn(move || {
                    processor.process(&id, &ScanContext::new("Ramadan", "Warehouse A", "Ali"))
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_success());
        }
    }

    #[test]
    fn test_same_beneficiary_racing_two_projects_commits_in_both() {
        let id = "507f1f77bcf86cd799439011";
        let processor = processor_with(&[id]);

        let projects = ["Ramadan", "Winter"];
        let handles: Vec<_> = projects
            .iter()
            .map(|project| {
                let processor = processor.clone();
                let project = project.to_string();
                thread::spawn(move || {
                    processor.process(id, &ScanContext::new(&project, "Warehouse A", "Ali"))
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_success());
        }
    }
}
