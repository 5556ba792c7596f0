use std::sync::LazyLock;

use regex::Regex;

use super::prompt::MESSAGE_COUNT;

/// Leading list decoration models tend to add despite instructions:
/// `1.`, `2)`, `３．`, `-`, `*`, `•`, `・`, and surrounding quotes.
static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[-*•・]|\d+\s*[.)．、:）])?\s*[「\x22]?")
        .expect("list marker pattern is a valid regex")
});

static TRAILING_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[」\x22]\s*$").expect("quote pattern is a valid regex"));

/// Splits provider output into at most [`MESSAGE_COUNT`] card messages.
pub fn parse_messages(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            let line = LIST_MARKER.replace(line, "");
            TRAILING_QUOTE.replace(&line, "").trim().to_string()
        })
        .filter(|line| !line.is_empty())
        .take(MESSAGE_COUNT)
        .collect()
}
