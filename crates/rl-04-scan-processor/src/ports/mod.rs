//! Ports layer: the external beneficiary directory.

pub mod outbound;

pub use outbound::{BeneficiaryDirectory, DirectoryError};
