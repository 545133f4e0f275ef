//! Log line formatting for the batch run.
//!
//! Each log line has a `format_*` function (returns `String`) for
//! testability; printing stays with the caller. Format functions are pure —
//! no I/O, no side effects.
//!
//! ```text
//! Processing photo.png for 2064x2752
//! Resized photo.png to 2064x2752
//! Error processing broken.png: Processing failed: ...
//! Image resizing complete!
//! ```

use crate::dimensions::TargetDimension;
use crate::imaging::BackendError;

/// Progress line printed before a variant is produced.
pub fn format_progress(file_name: &str, dim: TargetDimension) -> String {
    format!("Processing {} for {}x{}", file_name, dim.width, dim.height)
}

/// Completion line printed after a variant is written.
pub fn format_completion(file_name: &str, dim: TargetDimension) -> String {
    format!("Resized {} to {}x{}", file_name, dim.width, dim.height)
}

/// Per-file error line (stderr). The batch continues after this.
pub fn format_file_error(file_name: &str, error: &BackendError) -> String {
    format!("Error processing {}: {}", file_name, error)
}

/// Printed once after the whole batch completes.
pub fn format_batch_complete() -> String {
    "Image resizing complete!".to_string()
}

/// Top-level error line (stderr). The batch aborted.
pub fn format_batch_error(error: &dyn std::error::Error) -> String {
    format!("Error in image resizing: {}", error)
}
