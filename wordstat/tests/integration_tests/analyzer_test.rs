// tests/integration_tests/analyzer_test.rs
use wordstat::{TARGET_TOKENS, analyze, count_occurrences};

#[test]
fn test_target_tokens_are_fixed() {
    assert_eq!(TARGET_TOKENS, ["is", "are", "you"]);
}

#[test]
fn test_word_count_matches_whitespace_split() {
    let samples = [
        "",
        " ",
        "one",
        "  two  words ",
        "tabs\tand\nnewlines\r\nmixed",
        "unicode\u{00a0}space",
    ];

    for sample in samples {
        assert_eq!(
            analyze(sample).word_count,
            sample.split_whitespace().count(),
            "word count for {sample:?}"
        );
    }
}

#[test]
fn test_counts_match_naive_scan() {
    fn naive(haystack: &str, needle: &str) -> usize {
        let mut count = 0;
        let mut from = 0;
        while let Some(pos) = haystack[from..].find(needle) {
            count += 1;
            from += pos + needle.len();
        }
        count
    }

    let content = "isis is his island; you, your yoyou are bare areare";
    for token in TARGET_TOKENS {
        assert_eq!(count_occurrences(content, token), naive(content, token), "{token}");
    }

    let stats = analyze(content);
    assert_eq!(stats.is_count, naive(content, "is"));
    assert_eq!(stats.are_count, naive(content, "are"));
    assert_eq!(stats.you_count, naive(content, "you"));
}

#[test]
fn test_superlatives_break_ties_by_first_occurrence() {
    let stats = analyze("dog cat elephant giraffes ox ab");
    assert_eq!(stats.longest_word, "elephant");
    assert_eq!(stats.shortest_word, "ox");
}

#[test]
fn test_punctuation_stays_attached_to_tokens() {
    let stats = analyze("Hello, world!");
    assert_eq!(stats.word_count, 2);
    assert_eq!(stats.longest_word, "Hello,");
    assert_eq!(stats.shortest_word, "Hello,");
}
