use regex::Regex;
use std::sync::LazyLock;

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("word pattern compiles"));

/// Lowercase `text` and keep only its word tokens, joined by single spaces.
///
/// A word is a run of Unicode word characters (letters, digits, underscore).
/// Everything else is dropped, so `"Don't stop!"` becomes `"don t stop"`.
pub fn preprocess(text: &str) -> String {
    let lower = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lower)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
