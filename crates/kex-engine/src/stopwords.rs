//! Stop-word filtering for keyword candidates.
//!
//! The two scorers intentionally use different lists:
//!
//! - The vectorized scorer filters unigram candidates against the full
//!   curated English list from the `stop-words` crate.
//! - The frequency fallback uses the short inline list below, since it never
//!   forms bigram candidates and has no external dependencies.
//!
//! Unifying the lists would change observable output of one path or the
//! other, so the asymmetry is kept.

#[cfg(feature = "vectorized")]
use std::collections::HashSet;

#[cfg(feature = "vectorized")]
use stop_words::LANGUAGE;

/// Curated English function words for the vectorized scorer.
///
/// Uses a `HashSet` for O(1) lookup. All words are stored lowercase; terms
/// are case-folded before lookup by the tokenizer, so `contains` takes the
/// term as-is.
#[cfg(feature = "vectorized")]
pub struct Stopwords {
    /// Lowercase stop words.
    words: HashSet<String>,
}

#[cfg(feature = "vectorized")]
impl Default for Stopwords {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "vectorized")]
impl Stopwords {
    /// Builds the English stop-word set from the `stop-words` crate.
    pub fn new() -> Self {
        let words = stop_words::get(LANGUAGE::English)
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect();
        Self { words }
    }

    /// Checks whether a lowercase term is a stop word.
    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(term)
    }

    /// Returns the number of stop words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Short inline stop-word list for the frequency fallback scorer.
///
/// English function words plus question words, auxiliaries, and personal
/// possessives. Possessives matter here: FAQ questions are full of
/// "my password", "your account", and without them the pronoun would
/// outrank the shared noun on short corpora.
static FALLBACK_STOPWORDS: &[&str] = &[
    "a", "an", "and", "the", "is", "am", "are", "were", "was", "be", "been", "being", "to", "of",
    "in", "for", "on", "with", "by", "or", "at", "from", "into", "as", "about", "this", "that",
    "these", "those", "it", "its", "your", "you", "we", "our", "their", "his", "her", "they",
    "can", "will", "would", "should", "could", "do", "does", "did", "not", "no", "yes", "how",
    "why", "what", "where", "when", "who", "which", "my", "me", "mine",
];

/// Checks whether a lowercase term is in the fallback stop-word list.
pub(crate) fn is_fallback_stopword(term: &str) -> bool {
    FALLBACK_STOPWORDS.contains(&term)
}

#[cfg(test)]
mod test {
    use super::*;

    #[cfg(feature = "vectorized")]
    #[test]
    fn curated_list_contains_function_words() {
        let sw = Stopwords::new();
        assert!(sw.contains("the"));
        assert!(sw.contains("what"));
        assert!(sw.contains("are"));
        assert!(sw.contains("your"));
        assert!(sw.contains("how"));
    }

    #[cfg(feature = "vectorized")]
    #[test]
    fn curated_list_keeps_content_words() {
        let sw = Stopwords::new();
        assert!(!sw.contains("password"));
        assert!(!sw.contains("hours"));
        assert!(!sw.contains("reset"));
    }

    #[cfg(feature = "vectorized")]
    #[test]
    fn curated_list_has_reasonable_size() {
        let sw = Stopwords::new();
        // Stopwords ISO English carries a few hundred entries.
        assert!(sw.len() > 100);
        assert!(!sw.is_empty());
    }

    #[test]
    fn fallback_list_covers_question_words() {
        for word in ["how", "do", "what", "where", "my", "your"] {
            assert!(is_fallback_stopword(word), "expected stop word: {word}");
        }
    }

    #[test]
    fn fallback_list_keeps_content_words() {
        for word in ["password", "reset", "change", "hours"] {
            assert!(!is_fallback_stopword(word), "unexpected stop word: {word}");
        }
    }
}
