//! Payload-to-identifier resolution.

use shared_types::{BeneficiaryId, IdParseError};

/// Raw scan text did not yield a valid identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// The extracted candidate failed identifier validation.
    InvalidPayload { reason: IdParseError },
}

impl std::fmt::Display for PayloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadError::InvalidPayload { reason } => {
                write!(f, "Invalid scan payload: {}", reason)
            }
        }
    }
}

impl std::error::Error for PayloadError {}

/// Resolves raw scan text to a canonical beneficiary identifier.
///
/// Extraction rule:
/// - If the text contains `id=`, the candidate is everything between the
///   first `id=` and the next `&` (or end of string).
/// - Otherwise the candidate is the whole input, trimmed.
///
/// The candidate must then pass identifier validation (24 hex characters).
///
/// Idempotent: resolving the string form of a returned id yields the same id.
///
/// # Errors
/// `PayloadError::InvalidPayload` for any text that does not contain a
/// well-formed identifier.
pub fn resolve(raw: &str) -> Result<BeneficiaryId, PayloadError> {
    let candidate = match raw.find("id=") {
        Some(start) => {
            let rest = &raw[start + 3..];
            match rest.find('&') {
                Some(end) => &rest[..end],
                None => rest,
            }
        }
        None => raw.trim(),
    };

    BeneficiaryId::parse(candidate).map_err(|reason| PayloadError::InvalidPayload { reason })
}
