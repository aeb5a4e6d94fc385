//! Batch report domain types.

pub mod report;

pub use report::{BatchReport, BatchSummary, PageOutcome, PerPageResult};
