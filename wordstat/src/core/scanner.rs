// src/core/scanner.rs
pub mod accumulator;
pub mod selection;


use crate::core::analyzer::analyze;
use crate::error::ScanError;
use crate::models::{AnalysisResult, SkippedFile};
use accumulator::ScanAccumulator;
use selection::is_selected;
use std::env;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Analyzes the files of a directory and aggregates their word statistics.
///
/// Files are visited one at a time in file-name order within each directory,
/// descending into subdirectories as they are reached. Each file's content is
/// dropped once its statistics are computed.
///
/// # Arguments
///
/// * `dir` - The directory path to scan
/// * `include_subdirectories` - Descend into subdirectories and analyze `.txt`
///   files at any depth; otherwise analyze every file directly under `dir`
///
/// # Returns
///
/// * `Ok(AnalysisResult)` - Per-file statistics keyed by file name, the
///   overall longest and shortest words, and any files that were skipped
///
/// # Errors
///
/// This function returns an error if:
/// * `dir` does not exist or is not a directory
/// * `dir` itself cannot be listed
///
/// Files that cannot be read or are not valid UTF-8, and subdirectories that
/// cannot be listed, are skipped and reported in [`AnalysisResult::skipped`].
pub fn aggregate_directory(
    dir: &Path,
    include_subdirectories: bool,
) -> Result<AnalysisResult, ScanError> {
    let root = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        env::current_dir()
            .map_err(|e| ScanError::io(dir, e))?
            .join(dir)
    };

    ensure_traversable(&root)?;

    let max_depth = if include_subdirectories { usize::MAX } else { 1 };
    let walker = WalkDir::new(&root)
        .follow_links(true)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name();

    let accumulator = walker
        .into_iter()
        .try_fold(ScanAccumulator::default(), |acc, entry| match entry {
            Ok(entry) if is_selected(&entry, include_subdirectories) => Ok(visit_file(acc, &entry)),
            Ok(_) => Ok(acc),
            Err(err) if err.depth() == 0 => Err(ScanError::traversal(&root, err)),
            Err(err) => {
                let skipped = SkippedFile::walk_error(&err);
                warn!(path = %skipped.path.display(), error = %err, "skipping inaccessible entry");
                Ok(acc.skip(skipped))
            }
        })?;

    let result = accumulator.finish();
    info!(
        root = %root.display(),
        files = result.files_analyzed(),
        skipped = result.skipped.len(),
        "scan complete"
    );
    Ok(result)
}

fn ensure_traversable(root: &Path) -> Result<(), ScanError> {
    let metadata = fs::metadata(root).map_err(|e| ScanError::io(root, e))?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    fs::read_dir(root).map_err(|e| ScanError::io(root, e))?;
    Ok(())
}

fn visit_file(acc: ScanAccumulator, entry: &DirEntry) -> ScanAccumulator {
    let path = entry.path();
    match fs::read_to_string(path) {
        Ok(content) => {
            let stats = analyze(&content);
            debug!(file = %path.display(), words = stats.word_count, "analyzed file");
            acc.record(entry.file_name().to_string_lossy().into_owned(), stats)
        }
        Err(err) => {
            let skipped = SkippedFile::read_error(path, &err);
            warn!(file = %path.display(), reason = %skipped.reason, error = %err, "skipping file");
            acc.skip(skipped)
        }
    }
}
