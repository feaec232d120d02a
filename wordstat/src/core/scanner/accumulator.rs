// src/core/scanner/accumulator.rs
use crate::models::{AnalysisResult, SkippedFile, WordStats};
use std::collections::BTreeMap;

/// Longest and shortest words seen so far across a scan.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OverallWords {
    pub longest: String,
    pub shortest: String,
}

impl OverallWords {
    /// Folds one file's superlatives in.
    ///
    /// Both sides replace only on a strict length change, so the earliest
    /// file wins ties. An empty running shortest is always replaced.
    #[must_use]
    pub fn absorb(mut self, stats: &WordStats) -> Self {
        if stats.longest_len() > self.longest.chars().count() {
            self.longest.clone_from(&stats.longest_word);
        }

        if self.shortest.is_empty() || stats.shortest_len() < self.shortest.chars().count() {
            self.shortest.clone_from(&stats.shortest_word);
        }

        self
    }
}

/// State threaded through a scan, one file at a time.
#[derive(Debug, Default)]
pub struct ScanAccumulator {
    per_file: BTreeMap<String, WordStats>,
    overall: OverallWords,
    skipped: Vec<SkippedFile>,
}

impl ScanAccumulator {
    /// Adds an analyzed file. A file name seen before is overwritten.
    #[must_use]
    pub fn record(mut self, file_name: String, stats: WordStats) -> Self {
        self.overall = self.overall.absorb(&stats);
        self.per_file.insert(file_name, stats);
        self
    }

    #[must_use]
    pub fn skip(mut self, skipped: SkippedFile) -> Self {
        self.skipped.push(skipped);
        self
    }

    #[must_use]
    pub fn finish(self) -> AnalysisResult {
        AnalysisResult {
            per_file: self.per_file,
            overall_longest_word: self.overall.longest,
            overall_shortest_word: self.overall.shortest,
            skipped: self.skipped,
        }
    }
}
