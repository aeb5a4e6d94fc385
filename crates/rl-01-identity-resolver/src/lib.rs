//! # Identity Resolver Subsystem
//!
//! **Subsystem ID:** 1
//!
//! ## Purpose
//!
//! Extracts a canonical [`BeneficiaryId`] from raw scanned text. QR labels
//! in the field carry either a bare identifier or a card URL with the
//! identifier in an `id=` query parameter, so both shapes must resolve to
//! the same value.
//!
//! Pure functions only: no I/O, no side effects, total over arbitrary
//! input. Malformed text is a classified result, never a panic.

pub mod resolver;

pub use resolver::{resolve, PayloadError};
