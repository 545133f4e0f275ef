//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the batch loop (which decides what variants to create)
//! and the [`backend`](super::backend) (which does the actual pixel work).
//! This separation allows swapping backends (e.g. for testing with a mock)
//! without changing batch logic.

use std::path::PathBuf;

/// Opaque background color used to pad the letterbox canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Rgb {
    /// The App Store screenshot purple: RGB (143, 44, 235).
    fn default() -> Self {
        Self::new(143, 44, 235)
    }
}

/// Full specification for one letterbox operation: decode `source`, scale
/// it to fit inside `width`×`height` preserving aspect ratio, center it on
/// a `background`-filled canvas of exactly that size, and encode the canvas
/// to `output` (format inferred from the output extension, overwriting any
/// existing file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterboxParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
}
