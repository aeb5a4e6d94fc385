//! Ports layer: the external image decoder.

pub mod outbound;

pub use outbound::{DecodeError, ImageDecoder};
