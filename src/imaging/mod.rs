//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Probe** | `image::image_dimensions` (header only, no pixel decode) |
//! | **Decode (PNG, JPEG, TIFF, BMP)** | `image` crate (pure Rust decoders) |
//! | **Contain scale** | Lanczos3 via `image::imageops::resize` |
//! | **Canvas compositing** | background fill + centered `imageops::overlay` |
//! | **Encode** | extension-dispatched `image` encoders |
//!
//! The module is split into:
//! - **Calculations**: pure functions for fit/centering math (unit testable)
//! - **Parameters**: data structures describing a letterbox operation
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod calculations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use params::{LetterboxParams, Rgb};
pub use rust_backend::RustBackend;
