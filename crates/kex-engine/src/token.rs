//! Tokenization shared by both scorers.
//!
//! A token is a maximal run of two or more consecutive alphabetic characters,
//! case-folded to lowercase. Digits, punctuation, emoji, and single letters
//! never produce tokens.

/// Splits text into lowercase alphabetic runs of length >= 2, in document order.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|run| run.chars().count() >= 2)
        .map(|run| run.to_lowercase())
        .collect()
}

/// Forms every adjacent-token bigram from a token sequence, in order.
///
/// Bigrams may overlap: the sequence `[a, b, c]` yields `"a b"` and `"b c"`.
pub(crate) fn bigrams(tokens: &[String]) -> Vec<String> {
    tokens
        .windows(2)
        .map(|pair| format!("{} {}", pair[0], pair[1]))
        .collect()
}
