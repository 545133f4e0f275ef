//! Variant filename construction.
//!
//! Every output file is named `<baseName>_<width>x<height>.<ext>` where
//! `baseName` and `ext` come from the source file. The extension keeps the
//! case it was found with, so `Photo.PNG` yields `Photo_2064x2752.PNG`.

use crate::dimensions::TargetDimension;
use std::path::Path;

/// Split a file name into (base name, extension).
///
/// Returns `None` for entries without an extension — those can never be
/// image candidates. The extension is returned without the leading dot.
pub fn split_file_name(path: &Path) -> Option<(String, String)> {
    let base = path.file_stem()?.to_str()?.to_string();
    let ext = path.extension()?.to_str()?.to_string();
    Some((base, ext))
}

/// Build the output file name for one (source × dimension) pair.
pub fn variant_file_name(base: &str, dim: TargetDimension, ext: &str) -> String {
    format!("{}_{}x{}.{}", base, dim.width, dim.height, ext)
}
