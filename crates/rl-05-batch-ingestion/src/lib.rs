//! # Batch Ingestion Subsystem
//!
//! **Subsystem ID:** 5
//!
//! ## Purpose
//!
//! Feeds a document's rasterized pages through the external barcode
//! decoder and the Scan Processor, one page at a time, producing a
//! per-page outcome report. The same exactly-once guarantee the single
//! scan path gives applies to every page, because every page IS a single
//! scan.
//!
//! ## Partial failure
//!
//! A decode failure or duplicate on page *k* never aborts or affects page
//! *k+1*: each page yields a classified row. Cancelling a run between
//! pages is safe: every completed page's effect is already durably
//! committed by the ledger.

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::{BatchReport, BatchSummary, PageOutcome, PerPageResult};
pub use ports::outbound::{DecodeError, ImageDecoder};
pub use service::BatchIngestor;
