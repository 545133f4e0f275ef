//! The batch resize loop.
//!
//! Walks a source directory (non-recursively), filters entries to the
//! recognized image extensions, and produces one letterboxed variant per
//! (image × target dimension) pair in the output directory.
//!
//! ## Error tiers
//!
//! - **Per-file**: a probe or letterbox failure is logged with the file
//!   name, recorded in that file's [`FileReport`], and processing moves on
//!   to the next file. A half-written set of variants may remain on disk.
//! - **Top-level** ([`BatchError`]): the output directory cannot be created
//!   or the input directory cannot be listed. These abort the batch.
//!
//! Unrecognized extensions and subdirectories are skipped silently — no
//! log line, no report.

use crate::dimensions::{TargetDimension, app_store_dimensions};
use crate::imaging::{BackendError, ImageBackend, LetterboxParams, Rgb, RustBackend};
use crate::naming::{split_file_name, variant_file_name};
use crate::output;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Failed to create output directory {0}: {1}")]
    CreateOutputDir(PathBuf, std::io::Error),
    #[error("Failed to list input directory {0}: {1}")]
    ListInputDir(PathBuf, std::io::Error),
}

/// Extensions treated as images (compared case-insensitively).
pub const RECOGNIZED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tiff", "bmp"];

/// Configuration for a batch run.
///
/// Explicit values rather than module globals, so tests can run the batch
/// against alternate tables, extension sets, and colors.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Target dimensions, processed in order for every file.
    pub dimensions: Vec<TargetDimension>,
    /// Recognized extensions, lowercase, without dots.
    pub extensions: Vec<String>,
    /// Canvas padding color.
    pub background: Rgb,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            dimensions: app_store_dimensions(),
            extensions: RECOGNIZED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            background: Rgb::default(),
        }
    }
}

/// What happened to one recognized input file.
#[derive(Debug)]
pub enum FileOutcome {
    /// All variants were written; paths in table order.
    Completed { variants: Vec<PathBuf> },
    /// Probing or some variant failed; later variants were not attempted.
    Failed { error: BackendError },
}

/// Per-file result, in directory order.
#[derive(Debug)]
pub struct FileReport {
    pub file_name: String,
    pub outcome: FileOutcome,
}

/// Resize every recognized image in `input_dir` to every configured
/// dimension, writing variants into `output_dir` (created if absent).
pub fn resize_folder(
    input_dir: &Path,
    output_dir: &Path,
    config: &BatchConfig,
) -> Result<Vec<FileReport>, BatchError> {
    let backend = RustBackend::new();
    resize_folder_with_backend(&backend, input_dir, output_dir, config)
}

/// Run the batch using a specific backend (allows testing with a mock).
pub fn resize_folder_with_backend(
    backend: &impl ImageBackend,
    input_dir: &Path,
    output_dir: &Path,
    config: &BatchConfig,
) -> Result<Vec<FileReport>, BatchError> {
    std::fs::create_dir_all(output_dir)
        .map_err(|e| BatchError::CreateOutputDir(output_dir.to_path_buf(), e))?;

    let mut entries: Vec<PathBuf> = std::fs::read_dir(input_dir)
        .map_err(|e| BatchError::ListInputDir(input_dir.to_path_buf(), e))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect();
    // Filesystem order is arbitrary; sort for stable processing and reports
    entries.sort();

    let mut reports = Vec::new();

    for path in &entries {
        // Subdirectories have no extension match and fall through here too
        if !path.is_file() {
            continue;
        }
        let Some((base, ext)) = split_file_name(path) else {
            continue;
        };
        if !config
            .extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(&ext))
        {
            continue;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| base.clone());

        let outcome = match process_file(backend, path, &file_name, &base, &ext, output_dir, config)
        {
            Ok(variants) => FileOutcome::Completed { variants },
            Err(error) => {
                eprintln!("{}", output::format_file_error(&file_name, &error));
                FileOutcome::Failed { error }
            }
        };

        reports.push(FileReport { file_name, outcome });
    }

    Ok(reports)
}

/// Produce every variant for one recognized file. The first failure aborts
/// the remaining variants for this file only.
fn process_file(
    backend: &impl ImageBackend,
    source: &Path,
    file_name: &str,
    base: &str,
    ext: &str,
    output_dir: &Path,
    config: &BatchConfig,
) -> Result<Vec<PathBuf>, BackendError> {
    // Fail fast on undecodable files before any variant is written
    backend.probe(source)?;

    let mut variants = Vec::with_capacity(config.dimensions.len());

    for &dim in &config.dimensions {
        println!("{}", output::format_progress(file_name, dim));

        let output_path = output_dir.join(variant_file_name(base, dim, ext));
        backend.letterbox(&LetterboxParams {
            source: source.to_path_buf(),
            output: output_path.clone(),
            width: dim.width,
            height: dim.height,
            background: config.background,
        })?;

        println!("{}", output::format_completion(file_name, dim));
        variants.push(output_path);
    }

    Ok(variants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::Dimensions;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};
    use std::fs;
    use tempfile::TempDir;

    fn dim(width: u32, height: u32) -> TargetDimension {
        TargetDimension { width, height }
    }

    fn small_config(dimensions: Vec<TargetDimension>) -> BatchConfig {
        BatchConfig {
            dimensions,
            ..BatchConfig::default()
        }
    }

    fn touch(path: &Path) {
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn default_config_has_four_app_store_dimensions() {
        let config = BatchConfig::default();
        assert_eq!(config.dimensions.len(), 4);
        assert_eq!(config.dimensions[0], dim(2064, 2752));
        assert_eq!(config.extensions, ["png", "jpg", "jpeg", "tiff", "bmp"]);
        assert_eq!(config.background, Rgb::new(143, 44, 235));
    }

    #[test]
    fn produces_one_variant_per_dimension() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("in");
        let output = tmp.path().join("out");
        fs::create_dir(&input).unwrap();
        touch(&input.join("photo.png"));

        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 800,
            height: 600,
        }]);
        let config = small_config(vec![dim(100, 200), dim(200, 100)]);

        let reports =
            resize_folder_with_backend(&backend, &input, &output, &config).unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].file_name, "photo.png");
        let FileOutcome::Completed { variants } = &reports[0].outcome else {
            panic!("expected completed outcome");
        };
        assert_eq!(
            variants,
            &[
                output.join("photo_100x200.png"),
                output.join("photo_200x100.png"),
            ]
        );

        // 1 probe + 2 letterboxes, in table order
        let ops = backend.get_operations();
        assert_eq!(ops.len(), 3);
        assert!(matches!(&ops[0], RecordedOp::Probe(_)));
        assert!(matches!(
            &ops[1],
            RecordedOp::Letterbox { width: 100, height: 200, .. }
        ));
        assert!(matches!(
            &ops[2],
            RecordedOp::Letterbox { width: 200, height: 100, .. }
        ));
    }

    #[test]
    fn skips_unrecognized_extensions_without_report() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("in");
        let output = tmp.path().join("out");
        fs::create_dir(&input).unwrap();
        touch(&input.join("notes.txt"));
        touch(&input.join("README"));

        let backend = MockBackend::new();
        let config = small_config(vec![dim(100, 100)]);

        let reports =
            resize_folder_with_backend(&backend, &input, &output, &config).unwrap();

        assert!(reports.is_empty());
        assert!(backend.get_operations().is_empty());
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("in");
        let output = tmp.path().join("out");
        fs::create_dir(&input).unwrap();
        touch(&input.join("Shot.JPEG"));

        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 10,
            height: 10,
        }]);
        let config = small_config(vec![dim(50, 50)]);

        let reports =
            resize_folder_with_backend(&backend, &input, &output, &config).unwrap();

        assert_eq!(reports.len(), 1);
        let FileOutcome::Completed { variants } = &reports[0].outcome else {
            panic!("expected completed outcome");
        };
        // Output name keeps the original extension case
        assert_eq!(variants[0], output.join("Shot_50x50.JPEG"));
    }

    #[test]
    fn skips_subdirectories() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("in");
        let output = tmp.path().join("out");
        fs::create_dir_all(input.join("nested.png")).unwrap(); // a directory, not a file

        let backend = MockBackend::new();
        let config = small_config(vec![dim(100, 100)]);

        let reports =
            resize_folder_with_backend(&backend, &input, &output, &config).unwrap();

        assert!(reports.is_empty());
        assert!(backend.get_operations().is_empty());
    }

    #[test]
    fn one_failing_file_does_not_abort_the_batch() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("in");
        let output = tmp.path().join("out");
        fs::create_dir(&input).unwrap();
        touch(&input.join("a.png"));
        touch(&input.join("broken.png"));
        touch(&input.join("z.png"));

        // Probe fails for broken.png; the other two get dimensions
        let backend = MockBackend::with_failing(
            vec![
                Dimensions { width: 10, height: 10 },
                Dimensions { width: 20, height: 20 },
            ],
            vec!["broken.png"],
        );
        let config = small_config(vec![dim(100, 100), dim(200, 200)]);

        let reports =
            resize_folder_with_backend(&backend, &input, &output, &config).unwrap();

        assert_eq!(reports.len(), 3);
        assert!(matches!(reports[0].outcome, FileOutcome::Completed { .. }));
        assert!(matches!(reports[1].outcome, FileOutcome::Failed { .. }));
        assert!(matches!(reports[2].outcome, FileOutcome::Completed { .. }));

        // Failed file contributed no letterbox operations
        let letterboxes: Vec<_> = backend
            .get_operations()
            .into_iter()
            .filter(|op| matches!(op, RecordedOp::Letterbox { .. }))
            .collect();
        assert_eq!(letterboxes.len(), 4);
    }

    #[test]
    fn creates_missing_output_directory() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("in");
        let output = tmp.path().join("deeply/nested/out");
        fs::create_dir(&input).unwrap();

        let backend = MockBackend::new();
        let config = BatchConfig::default();

        resize_folder_with_backend(&backend, &input, &output, &config).unwrap();
        assert!(output.is_dir());
    }

    #[test]
    fn missing_input_directory_is_a_top_level_error() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("does-not-exist");
        let output = tmp.path().join("out");

        let backend = MockBackend::new();
        let result =
            resize_folder_with_backend(&backend, &input, &output, &BatchConfig::default());

        assert!(matches!(result, Err(BatchError::ListInputDir(_, _))));
    }

    #[test]
    fn background_color_reaches_the_backend() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("in");
        let output = tmp.path().join("out");
        fs::create_dir(&input).unwrap();
        touch(&input.join("photo.png"));

        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 10,
            height: 10,
        }]);
        let config = BatchConfig {
            dimensions: vec![dim(50, 50)],
            background: Rgb::new(1, 2, 3),
            ..BatchConfig::default()
        };

        resize_folder_with_backend(&backend, &input, &output, &config).unwrap();

        let ops = backend.get_operations();
        assert!(matches!(
            &ops[1],
            RecordedOp::Letterbox { background: (1, 2, 3), .. }
        ));
    }

    #[test]
    fn empty_dimension_table_produces_empty_variants() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("in");
        let output = tmp.path().join("out");
        fs::create_dir(&input).unwrap();
        touch(&input.join("photo.png"));

        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 10,
            height: 10,
        }]);
        let config = small_config(vec![]);

        let reports =
            resize_folder_with_backend(&backend, &input, &output, &config).unwrap();

        assert_eq!(reports.len(), 1);
        let FileOutcome::Completed { variants } = &reports[0].outcome else {
            panic!("expected completed outcome");
        };
        assert!(variants.is_empty());
    }
}
