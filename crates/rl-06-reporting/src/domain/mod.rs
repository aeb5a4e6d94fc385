//! Report domain: rows, filters and errors.

pub mod errors;
pub mod row;

pub use errors::ReportError;
pub use row::{ReportFilter, ReportRow};
