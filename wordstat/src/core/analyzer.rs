// src/core/analyzer.rs
use crate::models::WordStats;

/// Substrings counted in every file, in report order.
pub const TARGET_TOKENS: [&str; 3] = ["is", "are", "you"];

/// Computes word statistics for a file's content.
///
/// Tokens are maximal runs of non-whitespace, so empty or blank content has
/// no tokens: `word_count` is 0 and both superlatives are empty.
///
/// The target tokens are counted as case-sensitive, non-overlapping
/// substrings of the whole content, not per token: `"This is"` contains two
/// occurrences of `"is"`.
#[must_use]
pub fn analyze(content: &str) -> WordStats {
    let words: Vec<&str> = content.split_whitespace().collect();
    let [is_count, are_count, you_count] = TARGET_TOKENS.map(|token| count_occurrences(content, token));

    WordStats::new(
        words.len(),
        is_count,
        are_count,
        you_count,
        longest_word(&words).to_owned(),
        shortest_word(&words).to_owned(),
    )
}

/// Counts non-overlapping occurrences of `needle`, scanning left to right and
/// resuming after the end of each match.
#[must_use]
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// First word with the greatest character length, or `""` for no words.
#[must_use]
pub fn longest_word<'a>(words: &[&'a str]) -> &'a str {
    let mut longest = "";
    let mut longest_len = 0;
    for &word in words {
        let len = word.chars().count();
        if len > longest_len {
            longest = word;
            longest_len = len;
        }
    }
    longest
}

/// First word with the smallest character length, or `""` for no words.
#[must_use]
pub fn shortest_word<'a>(words: &[&'a str]) -> &'a str {
    let Some((&first, rest)) = words.split_first() else {
        return "";
    };

    let mut shortest = first;
    let mut shortest_len = first.chars().count();
    for &word in rest {
        let len = word.chars().count();
        if len < shortest_len {
            shortest = word;
            shortest_len = len;
        }
    }
    shortest
}
