//! # Error Types
//!
//! Defines error types used across subsystems.

use thiserror::Error;

/// Errors from a backing store adapter.
///
/// Every variant is a system fault, not a domain outcome: a duplicate
/// insert is reported through the store's insert result, never as an error.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// I/O failure during read or write. Retryable by the caller.
    #[error("store I/O error: {message}")]
    Io { message: String },

    /// Persisted data could not be decoded.
    #[error("store corruption: {message}")]
    Corruption { message: String },

    /// The store's lock could not be acquired.
    #[error("store locked: {message}")]
    Locked { message: String },
}

/// Errors from parsing a raw beneficiary identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdParseError {
    /// Identifier does not match the directory key scheme's fixed length.
    #[error("identifier must be {expected} characters, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// Identifier contains a character outside the hex alphabet.
    #[error("identifier contains non-hex character {found:?}")]
    NonHex { found: char },
}
