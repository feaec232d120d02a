// src/models/word_stats.rs
use serde::Serialize;

/// Statistics for a single analyzed file.
///
/// Built once by [`crate::core::analyzer::analyze`] and never mutated after.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordStats {
    pub word_count: usize,
    pub is_count: usize,
    pub are_count: usize,
    pub you_count: usize,
    pub longest_word: String,
    pub shortest_word: String,
}

impl WordStats {
    #[inline]
    #[must_use]
    pub const fn new(
        word_count: usize,
        is_count: usize,
        are_count: usize,
        you_count: usize,
        longest_word: String,
        shortest_word: String,
    ) -> Self {
        Self {
            word_count,
            is_count,
            are_count,
            you_count,
            longest_word,
            shortest_word,
        }
    }

    /// Length of the longest word in characters.
    #[inline]
    #[must_use]
    pub fn longest_len(&self) -> usize {
        self.longest_word.chars().count()
    }

    /// Length of the shortest word in characters.
    #[inline]
    #[must_use]
    pub fn shortest_len(&self) -> usize {
        self.shortest_word.chars().count()
    }
}
