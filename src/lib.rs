//! # shotfit
//!
//! Batch-resize screenshots to the fixed set of App Store Connect iPad
//! dimensions. Every image in a source directory is scaled to fit each
//! target box ("contain" semantics — no cropping) and centered on a solid
//! purple canvas that pads the remainder, then written to an output
//! directory as `<name>_<width>x<height>.<ext>`.
//!
//! # Architecture
//!
//! The pipeline is a flat, sequential pass: build the dimension table once,
//! then walk the source directory and produce one variant per
//! (image × dimension) pair. A failure on one file never aborts the batch —
//! it is reported and the loop moves on to the next file.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`dimensions`] | Parses human-readable size strings (`"2064 × 2752px"`) into the target dimension table |
//! | [`imaging`] | Codec boundary: [`ImageBackend`](imaging::ImageBackend) trait + pure-Rust implementation (probe, letterbox, encode) |
//! | [`naming`] | Variant filename construction (`photo_2064x2752.png`) |
//! | [`resize`] | The batch loop: directory listing, extension filter, per-file outcome reporting |
//! | [`output`] | Log line formatting — pure functions, printing stays with the caller |
//!
//! # Design Decisions
//!
//! ## Backend Trait Over Direct Calls
//!
//! All pixel work goes through the [`imaging::ImageBackend`] trait. The
//! batch loop in [`resize`] never touches the `image` crate directly, so
//! its skip/fail/continue logic is tested with a recording mock instead of
//! real encodes.
//!
//! ## Explicit Configuration
//!
//! The dimension table, recognized extensions, and background color travel
//! in a [`resize::BatchConfig`] value rather than module globals. Tests run
//! the batch against small alternate tables without touching the defaults.
//!
//! ## Explicit Per-File Outcomes
//!
//! Each processed file yields a [`resize::FileReport`] describing success
//! (with the variant paths written) or failure (with the error). The CLI
//! only prints log lines, but tests assert on outcomes instead of parsing
//! them.

pub mod dimensions;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod resize;
