// src/models.rs
mod analysis_result;
mod skipped_file;
mod word_stats;

pub use analysis_result::AnalysisResult;
pub use skipped_file::{SkipReason, SkippedFile};
pub use word_stats::WordStats;
