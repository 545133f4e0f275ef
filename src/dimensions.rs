//! Target dimension table built from human-readable size strings.
//!
//! App Store Connect lists its screenshot requirements as strings like
//! `"2064 × 2752px"`. This module parses those into structured
//! width × height pairs. Strings that don't match the pattern are dropped
//! silently — the table is whatever parsed, in input order.

use regex::Regex;
use std::sync::LazyLock;

/// The size strings App Store Connect publishes for 13" iPad screenshots.
pub const APP_STORE_SIZES: &[&str] = &[
    "2064 × 2752px",
    "2752 × 2064px",
    "2048 × 2732px",
    "2732 × 2048px",
];

/// `<int> x <int>`, separator `x`/`X` or the multiplication sign `×`,
/// optional whitespace, optional `px` suffix. Only the first match in a
/// string is used.
static DIMENSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*[×x]\s*(\d+)\s*(?:px)?").unwrap());

/// One output size an image must exactly match.
///
/// Immutable once parsed; both axes are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetDimension {
    pub width: u32,
    pub height: u32,
}

/// Extract a dimension from a free-form size string.
///
/// Returns `None` when no `<int> x <int>` pattern is present, when a
/// captured number overflows `u32`, or when either axis is zero.
pub fn parse_dimension(input: &str) -> Option<TargetDimension> {
    let captures = DIMENSION_PATTERN.captures(input)?;
    let width: u32 = captures[1].parse().ok()?;
    let height: u32 = captures[2].parse().ok()?;
    if width == 0 || height == 0 {
        return None;
    }
    Some(TargetDimension { width, height })
}

/// Build the dimension table: successful parses in input order.
///
/// Unparseable strings are dropped without error; duplicates are kept.
pub fn build_dimension_table<S: AsRef<str>>(inputs: &[S]) -> Vec<TargetDimension> {
    inputs
        .iter()
        .filter_map(|s| parse_dimension(s.as_ref()))
        .collect()
}

/// The fixed App Store Connect dimension table.
pub fn app_store_dimensions() -> Vec<TargetDimension> {
    build_dimension_table(APP_STORE_SIZES)
}
