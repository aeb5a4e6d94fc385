//! # Outbound Port - ImageDecoder
//!
//! The computer-vision side of barcode reading is an external collaborator;
//! the pipeline only cares whether a page yielded text.

use shared_types::PageImage;

/// Decoder failure on one page. Captured per-row, never aborts a batch.
#[derive(Debug, Clone)]
pub struct DecodeError {
    pub message: String,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Decoder error: {}", self.message)
    }
}

impl std::error::Error for DecodeError {}

/// External barcode/QR decoder.
pub trait ImageDecoder: Send + Sync {
    /// Returns the decoded text payload, or `None` when the page carries
    /// no readable code (an expected outcome, not an error).
    fn decode(&self, image: &PageImage) -> Result<Option<String>, DecodeError>;
}
