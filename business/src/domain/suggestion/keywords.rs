use std::sync::LazyLock;

use regex::Regex;

/// A keyword starts and ends with a word character and contains only word
/// characters and whitespace in between. `\w` and `\s` are Unicode-aware, so
/// kana, kanji and Latin letters all count as word characters while CJK
/// punctuation (`、`, `。`, `・`), ASCII punctuation and emoji split phrases.
static KEYWORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+[\w\s]*\w+").expect("keyword pattern is a valid regex"));

/// Extracts search terms from free-text suggestions.
///
/// Matches are leftmost-first and non-overlapping, returned in order of
/// occurrence. Duplicates are kept; single-character runs never match.
pub fn extract_keywords(text: &str) -> Vec<String> {
    KEYWORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
