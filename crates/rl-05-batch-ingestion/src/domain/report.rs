//! Per-page results and run summaries.

use uuid::Uuid;

use shared_types::ScanOutcome;

/// What happened on one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// The decoder found no barcode on this page.
    NoCodeFound,
    /// The decoded text went through the scan path; this is its outcome.
    Scan(ScanOutcome),
}

/// One row of the batch report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerPageResult {
    /// 0-based position in the input sequence.
    pub page_index: usize,
    /// Raw decoded text, when the decoder produced any.
    pub decoded_text: Option<String>,
    pub outcome: PageOutcome,
}

/// Tallies across one ingestion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub success: u64,
    pub duplicate: u64,
    pub no_code: u64,
    pub invalid_payload: u64,
    pub unknown_beneficiary: u64,
    pub system_error: u64,
}

impl BatchSummary {
    /// Folds one page outcome into the tallies.
    pub fn tally(&mut self, outcome: &PageOutcome) {
        match outcome {
            PageOutcome::NoCodeFound => self.no_code += 1,
            PageOutcome::Scan(ScanOutcome::Success { .. }) => self.success += 1,
            PageOutcome::Scan(ScanOutcome::Duplicate { .. }) => self.duplicate += 1,
            PageOutcome::Scan(ScanOutcome::InvalidPayload) => self.invalid_payload += 1,
            PageOutcome::Scan(ScanOutcome::UnknownBeneficiary) => self.unknown_beneficiary += 1,
            PageOutcome::Scan(ScanOutcome::SystemError { .. }) => self.system_error += 1,
        }
    }

    /// Total pages accounted for.
    pub fn total(&self) -> u64 {
        self.success
            + self.duplicate
            + self.no_code
            + self.invalid_payload
            + self.unknown_beneficiary
            + self.system_error
    }
}

/// Full result of one ingestion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Correlation id for this run; appears on every log line it emitted.
    pub run_id: Uuid,
    /// One row per input page, in page order.
    pub results: Vec<PerPageResult>,
    pub summary: BatchSummary,
}
