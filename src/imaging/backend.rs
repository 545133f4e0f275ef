//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations every backend must
//! support: probe and letterbox.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, zero
//! external dependencies. Everything is statically linked into the binary.

use super::params::LetterboxParams;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of a probe operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// Every backend must implement both operations — probe and letterbox — so
/// the batch loop is backend-agnostic.
pub trait ImageBackend {
    /// Get image dimensions from the file header without decoding pixels.
    fn probe(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Execute a letterbox operation (contain scale + pad + encode).
    fn letterbox(&self, params: &LetterboxParams) -> Result<(), BackendError>;
}
