//! Dependency-free frequency scorer.
//!
//! Crude corpus-aware weighting: each token gets a single global weight from
//! its document frequency, and a document scores a token once per occurrence.
//! Unigrams only; the short inline stop-word list applies.

use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
};

use crate::{scorer::smoothed_idf, stopwords::is_fallback_stopword, token::tokenize};

/// Scores every document and returns up to `top_k` ranked keywords each.
pub(crate) fn score(corpus: &[String], top_k: usize) -> Vec<Vec<String>> {
    let tokenized: Vec<Vec<String>> = corpus.iter().map(|doc| tokenize(doc)).collect();

    // Document frequency over per-document distinct tokens, stop words excluded.
    let mut df: HashMap<&str, usize> = HashMap::new();
    for tokens in &tokenized {
        let distinct: HashSet<&str> = tokens
            .iter()
            .map(String::as_str)
            .filter(|t| !is_fallback_stopword(t))
            .collect();
        for token in distinct {
            *df.entry(token).or_insert(0) += 1;
        }
    }

    let n = corpus.len();
    tokenized
        .iter()
        .map(|tokens| rank_document(tokens, &df, n, top_k))
        .collect()
}

/// Ranks one document's tokens by accumulated weight.
///
/// A token appearing k times contributes k times its global weight to a
/// single entry. Ties break by the token's first position in the document.
fn rank_document(
    tokens: &[String],
    df: &HashMap<&str, usize>,
    n: usize,
    top_k: usize,
) -> Vec<String> {
    let mut scores: HashMap<&str, f32> = HashMap::new();
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for (position, token) in tokens.iter().enumerate() {
        if is_fallback_stopword(token) {
            continue;
        }
        let term_df = df.get(token.as_str()).copied().unwrap_or(1);
        *scores.entry(token).or_insert(0.0) += smoothed_idf(n, term_df);
        first_seen.entry(token).or_insert(position);
    }

    let mut ranked: Vec<(&str, f32)> = scores.into_iter().collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| first_seen[a.0].cmp(&first_seen[b.0]))
    });

    ranked
        .into_iter()
        .take(top_k)
        .map(|(token, _)| token.to_string())
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn corpus(docs: &[&str]) -> Vec<String> {
        docs.iter().map(|d| (*d).to_string()).collect()
    }

    #[test]
    fn distinguishing_token_outranks_shared_token() {
        let docs = corpus(&[
            "How do I reset my password?",
            "How do I change my password?",
        ]);
        let keywords = score(&docs, 2);

        // "reset" and "change" each appear in a single document, so their
        // document-frequency weight beats "password", which both share.
        assert_eq!(keywords[0], vec!["reset", "password"]);
        assert_eq!(keywords[1], vec!["change", "password"]);
    }

    #[test]
    fn repeated_tokens_accumulate_but_appear_once() {
        let docs = corpus(&["badge badge badge office", "office parking"]);
        let keywords = score(&docs, 3);

        // Three occurrences of "badge" triple its weight; one output entry.
        assert_eq!(keywords[0][0], "badge");
        assert_eq!(keywords[0].iter().filter(|t| *t == "badge").count(), 1);
    }

    #[test]
    fn ties_break_by_first_position_in_document() {
        let docs = corpus(&["alpha beta gamma"]);
        let keywords = score(&docs, 3);

        // Singleton corpus: every token has df 1 and equal weight.
        assert_eq!(keywords[0], vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn stop_words_never_surface() {
        let docs = corpus(&["What are your hours?"]);
        let keywords = score(&docs, 7);
        assert_eq!(keywords[0], vec!["hours"]);
    }

    #[test]
    fn document_without_qualifying_tokens_yields_empty_list() {
        let docs = corpus(&["???", "123", "vpn access"]);
        let keywords = score(&docs, 7);
        assert!(keywords[0].is_empty());
        assert!(keywords[1].is_empty());
        assert_eq!(keywords[2], vec!["vpn", "access"]);
    }

    #[test]
    fn truncates_to_top_k() {
        let docs = corpus(&["one two three four five six"]);
        assert_eq!(score(&docs, 2)[0].len(), 2);
    }
}
