//! Errors that abort a directory scan.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal scan failures. Per-file problems are not errors; they are recorded
/// as [`crate::models::SkippedFile`] entries instead.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Root path does not exist.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Root path cannot be read.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Root path is not a directory.
    #[error("Root path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Generic I/O error on the root.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The walker failed on the root itself.
    #[error("Failed to traverse {path}: {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl ScanError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    pub fn traversal(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::Traversal {
            path: path.into(),
            source,
        }
    }
}
