//! Pure calculation functions for letterbox geometry.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate the largest dimensions that fit inside a target box while
/// preserving the source aspect ratio ("contain" fit).
///
/// Scales both down and up: a source smaller than the box grows to fill it
/// along one axis. At least one axis matches the target exactly; neither
/// exceeds it. Rounding goes down so a half-pixel never pushes the scaled
/// image past the canvas edge.
///
/// # Arguments
/// * `source` - Original image dimensions (width, height)
/// * `target` - Bounding box dimensions (width, height)
///
/// # Returns
/// * `(width, height)` - Contain-fit dimensions, each at least 1
pub fn calculate_contain_dimensions(source: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    let src_aspect = src_w as f64 / src_h as f64;
    let tgt_aspect = tgt_w as f64 / tgt_h as f64;

    let (w, h) = if src_aspect > tgt_aspect {
        // Source is wider: width matches, height shrinks below target
        let w = tgt_w;
        let h = (w as f64 / src_aspect).floor() as u32;
        (w, h)
    } else {
        // Source is taller or same aspect: height matches
        let h = tgt_h;
        let w = (h as f64 * src_aspect).floor() as u32;
        (w, h)
    };

    (w.max(1), h.max(1))
}

/// Calculate the top-left offset that centers an inner rectangle within an
/// outer one. The inner rectangle must not exceed the outer on either axis,
/// which `calculate_contain_dimensions` guarantees.
pub fn calculate_centered_offset(inner: (u32, u32), outer: (u32, u32)) -> (i64, i64) {
    let x = (i64::from(outer.0) - i64::from(inner.0)) / 2;
    let y = (i64::from(outer.1) - i64::from(inner.1)) / 2;
    (x, y)
}
