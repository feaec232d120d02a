// src/models/skipped_file.rs
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The file could not be opened or read.
    Unreadable,
    /// The file content is not valid UTF-8.
    InvalidUtf8,
    /// An entry below the root could not be traversed.
    Inaccessible,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unreadable => "unreadable",
            Self::InvalidUtf8 => "invalid UTF-8",
            Self::Inaccessible => "inaccessible",
        };
        f.write_str(label)
    }
}

/// A path left out of a scan, with the reason it was left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
    pub message: String,
}

impl SkippedFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, reason: SkipReason, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason,
            message: message.into(),
        }
    }

    /// Classifies a failed read of `path`.
    #[must_use]
    pub fn read_error(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        let reason = if error.kind() == std::io::ErrorKind::InvalidData {
            SkipReason::InvalidUtf8
        } else {
            SkipReason::Unreadable
        };
        Self::new(path, reason, error.to_string())
    }

    /// Records an entry the directory walker could not visit.
    #[must_use]
    pub fn walk_error(error: &walkdir::Error) -> Self {
        let path = error.path().map(PathBuf::from).unwrap_or_default();
        Self::new(path, SkipReason::Inaccessible, error.to_string())
    }
}
