//! # Batch Ingestor Service

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{BatchReport, BatchSummary, PageOutcome, PerPageResult};
use crate::ports::outbound::ImageDecoder;
use rl_04_scan_processor::ScanProcessor;
use shared_types::{PageImage, ScanContext, ScanOutcome};

/// Drives a sequence of page images through decode-then-scan.
pub struct BatchIngestor {
    decoder: Arc<dyn ImageDecoder>,
    processor: Arc<ScanProcessor>,
}

impl BatchIngestor {
    pub fn new(decoder: Arc<dyn ImageDecoder>, processor: Arc<ScanProcessor>) -> Self {
        Self { decoder, processor }
    }

    /// Ingests pages strictly in input order, one report row each.
    ///
    /// A failed page is recorded and the run continues; by the time this
    /// returns, every `Success` row's transaction is already committed,
    /// so an interrupted caller loses only the report, never the ledger
    /// effect.
    pub fn ingest<I>(&self, pages: I, ctx: &ScanContext) -> BatchReport
    where
        I: IntoIterator<Item = PageImage>,
    {
        let run_id = Uuid::new_v4();
        info!(
            run_id = %run_id,
            project = %ctx.project_name,
            location = %ctx.location,
            "batch ingestion started"
        );

        let mut results = Vec::new();
        let mut summary = BatchSummary::default();

        for (page_index, page) in pages.into_iter().enumerate() {
            let (decoded_text, outcome) = match self.decoder.decode(&page) {
                Ok(Some(text)) => {
                    let scan = self.processor.process(&text, ctx);
                    (Some(text), PageOutcome::Scan(scan))
                }
                Ok(None) => (None, PageOutcome::NoCodeFound),
                Err(e) => {
                    warn!(run_id = %run_id, page = page_index, error = %e, "page decode failed");
                    (
                        None,
                        PageOutcome::Scan(ScanOutcome::SystemError {
                            detail: e.to_string(),
                        }),
                    )
                }
            };

            summary.tally(&outcome);
            results.push(PerPageResult {
                page_index,
                decoded_text,
                outcome,
            });
        }

        info!(
            run_id = %run_id,
            pages = results.len(),
            success = summary.success,
            duplicate = summary.duplicate,
            no_code = summary.no_code,
            "batch ingestion finished"
        );

        BatchReport {
            run_id,
            results,
            summary,
        }
    }
}
