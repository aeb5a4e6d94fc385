//! # Durability Across Restarts
//!
//! The file-backed stores are what make the exactly-once guarantee hold
//! across terminal restarts and across terminals sharing one data
//! directory. Each test opens fresh store instances over the same
//! directory, standing in for separate processes.

#[cfg(test)]
mod tests {
    use std::fs::OpenOptions;
    use std::io::Write;
    use std::sync::Arc;

    use serde_json::json;
    use tempfile::TempDir;

    use rl_02_distribution_ledger::{
        FileTransactionStore, LedgerApi, LedgerError, LedgerQuery, LedgerService,
    };
    use rl_03_inventory::{
        FileInventoryStore, InventoryApi, InventoryService, LedgerIssuedCounter,
    };
    use rl_04_scan_processor::{InMemoryDirectory, ScanProcessor};
    use shared_types::{BeneficiaryId, MockTimeSource, ScanContext};

    const B1: &str = "507f1f77bcf86cd799439011";

    fn directory() -> Arc<InMemoryDirectory> {
        let directory = Arc::new(InMemoryDirectory::new());
        directory.insert(
            BeneficiaryId::parse(B1).unwrap(),
            serde_json::from_value(json!({"enname": "Fatima"})).unwrap(),
        );
        directory
    }

    /// One "terminal": its own store handle and processor over a shared dir.
    fn terminal(dir: &TempDir, now: u64) -> ScanProcessor {
        let store = Arc::new(FileTransactionStore::open(dir.path()).unwrap());
        let ledger = Arc::new(LedgerService::new(store));
        ScanProcessor::new(directory(), ledger, Arc::new(MockTimeSource::new(now)))
    }

    fn ctx() -> ScanContext {
        ScanContext::new("Ramadan", "Warehouse A", "Ali")
    }

    #[test]
    fn test_duplicate_detected_across_terminals() {
        let dir = TempDir::new().unwrap();

        let first = terminal(&dir, 1000);
        assert!(first.process(B1, &ctx()).is_success());

        // Second terminal, same volume: sees the first terminal's commit
        let second = terminal(&dir, 2000);
        let outcome = second.process(B1, &ScanContext::new("Ramadan", "Warehouse B", "Sara"));
        assert!(outcome.is_duplicate());
    }

    #[test]
    fn test_journal_survives_reopen() {
        let dir = TempDir::new().unwrap();

        terminal(&dir, 1000).process(B1, &ctx());

        let store = Arc::new(FileTransactionStore::open(dir.path()).unwrap());
        let ledger = LedgerService::new(store);
        let rows = ledger.query(&LedgerQuery::default()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].beneficiary_name, "Fatima");
        assert_eq!(rows[0].timestamp, 1000);
    }

    #[test]
    fn test_corrupt_journal_row_is_reported_not_skipped() {
        let dir = TempDir::new().unwrap();
        terminal(&dir, 1000).process(B1, &ctx());

        let mut journal = OpenOptions::new()
            .append(true)
            .open(dir.path().join("transactions.jsonl"))
            .unwrap();
        writeln!(journal, "{{not json").unwrap();

        let store = Arc::new(FileTransactionStore::open(dir.path()).unwrap());
        let ledger = LedgerService::new(store);
        match ledger.query(&LedgerQuery::default()) {
            Err(LedgerError::CorruptRow { message }) => {
                // The error names the offending line
                assert!(message.contains("2"), "got: {}", message);
            }
            other => panic!("Expected CorruptRow, got {:?}", other),
        }
    }

    #[test]
    fn test_inventory_survives_reopen_and_recounts() {
        let dir = TempDir::new().unwrap();
        let ledger_dir = TempDir::new().unwrap();

        let store = Arc::new(FileTransactionStore::open(ledger_dir.path()).unwrap());
        let ledger = Arc::new(LedgerService::new(store));
        let time = Arc::new(MockTimeSource::new(1000));

        {
            let inventory = InventoryService::new(
                Arc::new(FileInventoryStore::open(dir.path()).unwrap()),
                Arc::new(LedgerIssuedCounter::new(ledger.clone())),
                time.clone(),
            );
            inventory.set_stock("Ramadan", "Warehouse A", 5).unwrap();
        }

        // A handout happens between the two inventory sessions
        let processor = ScanProcessor::new(directory(), ledger.clone(), time.clone());
        assert!(processor.process(B1, &ctx()).is_success());

        let inventory = InventoryService::new(
            Arc::new(FileInventoryStore::open(dir.path()).unwrap()),
            Arc::new(LedgerIssuedCounter::new(ledger)),
            time,
        );
        let status = inventory.status("Ramadan", "Warehouse A").unwrap();
        assert_eq!(status.initial_quantity, 5);
        assert_eq!(status.issued_count, 1);
        assert_eq!(status.remaining, 4);
    }
}
