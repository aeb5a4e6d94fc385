//! # Reporting Subsystem
//!
//! **Subsystem ID:** 6
//!
//! ## Purpose
//!
//! Read-only views over the distribution ledger for coordinators: filtered
//! transaction listings enriched with beneficiary profile fields, and the
//! distinct-value lookups that populate filter dropdowns.
//!
//! The ledger is the source of truth. The join to the directory is a LEFT
//! join: a beneficiary deleted from the directory after a handout still
//! appears in the report, with only the transaction's own columns.

pub mod domain;
pub mod service;

pub use domain::{ReportError, ReportFilter, ReportRow};
pub use service::ReportEngine;
