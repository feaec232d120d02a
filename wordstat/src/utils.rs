// src/utils.rs
use crate::config::OutputFormat;
use crate::models::AnalysisResult;
use anyhow::{Context as _, Result};
use std::fmt;

/// Renders a scan result in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_report(result: &AnalysisResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(result).context("Failed to serialize report as JSON")
        }
    }
}

#[must_use]
pub fn render_text(result: &AnalysisResult) -> String {
    TextReport(result).to_string()
}

/// Plain-text layout of an [`AnalysisResult`].
pub struct TextReport<'a>(pub &'a AnalysisResult);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        writeln!(f, "Word Statistics:")?;

        for (file_name, stats) in &result.per_file {
            writeln!(f, "{file_name}")?;
            writeln!(f, "Word count: {}", stats.word_count)?;
            writeln!(f, "Is count: {}", stats.is_count)?;
            writeln!(f, "Are count: {}", stats.are_count)?;
            writeln!(f, "You count: {}", stats.you_count)?;
            writeln!(f, "Longest word: {}", stats.longest_word)?;
            writeln!(f, "Shortest word: {}\n", stats.shortest_word)?;
        }

        writeln!(f, "\nOverall Statistics:")?;
        writeln!(f, "Overall Longest Word: {}", result.overall_longest_word)?;
        writeln!(f, "Overall Shortest Word: {}", result.overall_shortest_word)?;

        if !result.skipped.is_empty() {
            writeln!(f, "\nSkipped files:")?;
            for skipped in &result.skipped {
                writeln!(
                    f,
                    "{} ({}): {}",
                    skipped.path.display(),
                    skipped.reason,
                    skipped.message
                )?;
            }
        }

        Ok(())
    }
}
