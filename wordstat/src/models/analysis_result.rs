// src/models/analysis_result.rs
use crate::models::{SkippedFile, WordStats};
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of one directory scan.
///
/// `per_file` is keyed by file name, not full path, so two files sharing a
/// name in different directories collapse to the one visited last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub per_file: BTreeMap<String, WordStats>,
    pub overall_longest_word: String,
    pub overall_shortest_word: String,
    pub skipped: Vec<SkippedFile>,
}

impl AnalysisResult {
    #[inline]
    #[must_use]
    pub fn files_analyzed(&self) -> usize {
        self.per_file.len()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, file_name: &str) -> Option<&WordStats> {
        self.per_file.get(file_name)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.per_file.is_empty()
    }
}
