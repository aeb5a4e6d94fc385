//! # Integration Flows
//!
//! End-to-end chains across subsystems:
//!
//! 1. **Scan (4) → Ledger (2) → Inventory (3)**: every successful scan is
//!    one issued unit; duplicates and rejects consume nothing.
//! 2. **Batch (5) → Scan (4)**: each page carries the single-scan
//!    guarantee; page order never changes what gets committed.
//! 3. **Ledger (2) ⟕ Directory → Report (6)**: the report is a left join,
//!    rows survive directory loss.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use rand::seq::SliceRandom;
    use serde_json::json;

    use rl_02_distribution_ledger::{InMemoryTransactionStore, LedgerApi, LedgerService};
    use rl_03_inventory::{
        InMemoryInventoryStore, InventoryApi, InventoryService, LedgerIssuedCounter,
    };
    use rl_04_scan_processor::{InMemoryDirectory, ScanProcessor};
    use rl_05_batch_ingestion::{BatchIngestor, DecodeError, ImageDecoder, PageOutcome};
    use rl_06_reporting::{ReportEngine, ReportFilter};
    use shared_types::{
        BeneficiaryId, MockTimeSource, PageImage, ScanContext, ScanOutcome,
    };

    // 24-hex-char directory ids, consecutive suffixes
    const IDS: [&str; 4] = [
        "507f1f77bcf86cd799439011",
        "507f1f77bcf86cd799439012",
        "507f1f77bcf86cd799439013",
        "507f1f77bcf86cd799439014",
    ];

    struct Site {
        directory: Arc<InMemoryDirectory>,
        ledger: Arc<LedgerService<InMemoryTransactionStore>>,
        inventory: InventoryService<InMemoryInventoryStore>,
        processor: Arc<ScanProcessor>,
    }

    /// A distribution site: shared ledger, directory with `registered`
    /// beneficiaries, inventory derived from the same ledger.
    fn site(registered: usize) -> Site {
        let directory = Arc::new(InMemoryDirectory::new());
        for (i, id) in IDS.iter().take(registered).enumerate() {
            directory.insert(
                BeneficiaryId::parse(id).unwrap(),
                serde_json::from_value(json!({
                    "enname": format!("Person {}", i),
                    "village": "Al-Karama"
                }))
                .unwrap(),
            );
        }

        let ledger = Arc::new(LedgerService::new(Arc::new(InMemoryTransactionStore::new())));
        let time = Arc::new(MockTimeSource::new(1000));
        let inventory = InventoryService::new(
            Arc::new(InMemoryInventoryStore::new()),
            Arc::new(LedgerIssuedCounter::new(ledger.clone())),
            time.clone(),
        );
        let processor = Arc::new(ScanProcessor::new(directory.clone(), ledger.clone(), time));

        Site {
            directory,
            ledger,
            inventory,
            processor,
        }
    }

    fn ctx() -> ScanContext {
        ScanContext::new("Ramadan", "Warehouse A", "Ali")
    }

    #[test]
    fn test_issued_units_equal_successful_scans() {
        let site = site(3);
        site.inventory.set_stock("Ramadan", "Warehouse A", 10).unwrap();

        for id in IDS.iter().take(3) {
            assert!(site.processor.process(id, &ctx()).is_success());
        }
        // Rescan, garbage, and an unknown id consume nothing
        assert!(site.processor.process(IDS[0], &ctx()).is_duplicate());
        assert_eq!(site.processor.process("junk", &ctx()), ScanOutcome::InvalidPayload);
        assert_eq!(
            site.processor.process(IDS[3], &ctx()),
            ScanOutcome::UnknownBeneficiary
        );

        let status = site.inventory.status("Ramadan", "Warehouse A").unwrap();
        assert!(status.configured);
        assert_eq!(status.initial_quantity, 10);
        assert_eq!(status.issued_count, 3);
        assert_eq!(status.remaining, 7);
    }

    #[test]
    fn test_over_issuance_surfaces_negative_remaining() {
        let site = site(4);
        site.inventory.set_stock("Ramadan", "Warehouse A", 2).unwrap();

        for id in IDS {
            assert!(site.processor.process(id, &ctx()).is_success());
        }

        assert_eq!(site.inventory.remaining("Ramadan", "Warehouse A").unwrap(), -2);
        // The ceiling itself is untouched
        assert_eq!(site.inventory.get_stock("Ramadan", "Warehouse A").unwrap(), 2);
    }

    #[test]
    fn test_report_joins_profiles_onto_ledger_rows() {
        let site = site(2);
        site.processor.process(IDS[0], &ctx());
        site.processor.process(IDS[1], &ctx());

        let engine = ReportEngine::new(site.ledger.clone(), site.directory.clone());
        let rows = engine
            .report(&ReportFilter::new().project("Ramadan"))
            .unwrap();
        assert_eq!(rows.len(), 2);
        for row in &rows {
            let profile = row.profile.as_ref().unwrap();
            assert_eq!(profile.get_text("village"), Some("Al-Karama"));
            // The ledger's name snapshot matches the joined profile today
            assert_eq!(row.transaction.beneficiary_name, profile.display_name());
        }
    }

    #[test]
    fn test_report_keeps_rows_for_departed_beneficiaries() {
        let site = site(2);
        site.processor.process(IDS[0], &ctx());
        site.processor.process(IDS[1], &ctx());

        // Rebuild the directory with only one of the two still registered
        let directory = Arc::new(InMemoryDirectory::new());
        directory.insert(
            BeneficiaryId::parse(IDS[0]).unwrap(),
            serde_json::from_value(json!({"enname": "Person 0"})).unwrap(),
        );

        let engine = ReportEngine::new(site.ledger.clone(), directory);
        let rows = engine.report(&ReportFilter::new()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.iter().filter(|r| r.profile.is_none()).count(), 1);
    }

    /// Decoder mapping page bytes to scripted payloads.
    struct ScriptedDecoder {
        script: HashMap<Vec<u8>, Option<String>>,
    }

    impl ImageDecoder for ScriptedDecoder {
        fn decode(&self, image: &PageImage) -> Result<Option<String>, DecodeError> {
            Ok(self.script.get(&image.bytes).cloned().flatten())
        }
    }

    fn pages_for(ids: &[&str]) -> (ScriptedDecoder, Vec<PageImage>) {
        let mut script = HashMap::new();
        let mut pages = Vec::new();
        for (i, id) in ids.iter().enumerate() {
            let tag = format!("page-{}", i).into_bytes();
            script.insert(tag.clone(), Some(id.to_string()));
            pages.push(PageImage { bytes: tag });
        }
        (ScriptedDecoder { script }, pages)
    }

    #[test]
    fn test_batch_pages_commit_like_single_scans() {
        let site = site(2);
        // Two readable pages, one a rescan, plus one blank page
        let (decoder, mut pages) = pages_for(&[IDS[0], IDS[1], IDS[0]]);
        pages.push(PageImage {
            bytes: b"blank".to_vec(),
        });

        let ingestor = BatchIngestor::new(Arc::new(decoder), site.processor.clone());
        let report = ingestor.ingest(pages, &ctx());

        assert_eq!(report.summary.success, 2);
        assert_eq!(report.summary.duplicate, 1);
        assert_eq!(report.summary.no_code, 1);
        assert_eq!(site.ledger.count_by("Ramadan", "Warehouse A").unwrap(), 2);
    }

    #[test]
    fn test_batch_commits_are_order_independent() {
        let (decoder, mut pages) = pages_for(&[IDS[0], IDS[1], IDS[2], IDS[0], IDS[1]]);
        pages.shuffle(&mut rand::thread_rng());

        let site = site(3);
        let ingestor = BatchIngestor::new(Arc::new(decoder), site.processor.clone());
        let report = ingestor.ingest(pages, &ctx());

        // Which page wins each pair depends on order; the totals never do
        assert_eq!(report.summary.success, 3);
        assert_eq!(report.summary.duplicate, 2);
        assert_eq!(site.ledger.count_by("Ramadan", "Warehouse A").unwrap(), 3);

        // Rows stay indexed by input position even after the shuffle
        for (i, row) in report.results.iter().enumerate() {
            assert_eq!(row.page_index, i);
            assert!(matches!(row.outcome, PageOutcome::Scan(_)));
        }
    }

    #[test]
    fn test_batch_success_rows_appear_on_the_report() {
        let site = site(2);
        let (decoder, pages) = pages_for(&[IDS[0], IDS[1]]);
        let ingestor = BatchIngestor::new(Arc::new(decoder), site.processor.clone());
        let batch = ingestor.ingest(pages, &ctx());

        let engine = ReportEngine::new(site.ledger.clone(), site.directory.clone());
        let rows = engine.report(&ReportFilter::new()).unwrap();
        assert_eq!(rows.len() as u64, batch.summary.success);
    }
}
