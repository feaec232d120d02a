// src/core/scanner/selection.rs
use walkdir::DirEntry;

/// Extension required of files found in recursive scans.
pub const TEXT_EXTENSION: &str = ".txt";

/// Determines whether a walked entry is analyzed.
///
/// - Recursive scans take every regular file ending in `.txt`, at any depth.
/// - Top-level scans take every regular file directly under the root, with no
///   extension filter.
///
/// # Arguments
/// * `entry` - The directory entry to check
/// * `include_subdirectories` - Whether the scan descends below the root
///
/// # Returns
/// `true` if the entry should be read and analyzed
#[must_use]
pub fn is_selected(entry: &DirEntry, include_subdirectories: bool) -> bool {
    if !entry.file_type().is_file() {
        return false;
    }

    if include_subdirectories {
        has_text_extension(entry)
    } else {
        entry.depth() == 1
    }
}

/// Case-sensitive `.txt` suffix check on the file name.
#[must_use]
pub fn has_text_extension(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.ends_with(TEXT_EXTENSION))
}
