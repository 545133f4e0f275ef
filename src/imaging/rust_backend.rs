//! Pure Rust image processing backend — zero external dependencies.
//!
//! Decodes with the `image` crate's pure Rust decoders, scales with
//! Lanczos3, composites onto the background canvas with a centered
//! `imageops::overlay`, and encodes via the extension-dispatched encoders.
//!
//! JPEG and BMP outputs are flattened to RGB8 — those encoders have no
//! alpha channel. The canvas is fully opaque either way, so flattening
//! never changes what the file looks like.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::{calculate_centered_offset, calculate_contain_dimensions};
use super::params::LetterboxParams;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, Rgba, RgbaImage, imageops};
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Save the composited canvas, inferring format from the output extension.
/// Overwrites any existing file at the path.
fn save_canvas(canvas: RgbaImage, path: &Path) -> Result<(), BackendError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let result = match ext.as_str() {
        "png" | "tiff" => canvas.save(path),
        // No alpha channel in these encoders
        "jpg" | "jpeg" | "bmp" => DynamicImage::ImageRgba8(canvas).to_rgb8().save(path),
        other => {
            return Err(BackendError::ProcessingFailed(format!(
                "Unsupported output format: {}",
                other
            )));
        }
    };

    result.map_err(|e| {
        BackendError::ProcessingFailed(format!("Failed to encode {}: {}", path.display(), e))
    })
}

impl ImageBackend for RustBackend {
    fn probe(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to read dimensions: {}", e))
        })?;
        Ok(Dimensions { width, height })
    }

    fn letterbox(&self, params: &LetterboxParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;

        let target = (params.width, params.height);
        let (scaled_w, scaled_h) =
            calculate_contain_dimensions((img.width(), img.height()), target);
        let scaled = img.resize_exact(scaled_w, scaled_h, FilterType::Lanczos3);

        let background = Rgba([
            params.background.r,
            params.background.g,
            params.background.b,
            255,
        ]);
        let mut canvas = RgbaImage::from_pixel(params.width, params.height, background);
        let (x, y) = calculate_centered_offset((scaled_w, scaled_h), target);
        imageops::overlay(&mut canvas, &scaled.to_rgba8(), x, y);

        save_canvas(canvas, &params.output)
    }
}
