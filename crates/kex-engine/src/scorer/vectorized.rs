//! Corpus-wide TF-IDF scorer with unigram and bigram candidates.
//!
//! Builds a term-document weight table over the whole corpus, then reads off
//! the top weights per document. Candidate terms are every non-stop-word
//! unigram and every adjacent-token bigram; the stop-word exclusion applies
//! to unigram candidates only.
//!
//! Ranking is invariant to per-document scaling, so rows are left
//! unnormalized. Exact weight ties break by the term's first-occurrence
//! position in the corpus-wide vocabulary scan, never by map iteration
//! order.

use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
};

use crate::{
    scorer::smoothed_idf,
    stopwords::Stopwords,
    token::{bigrams, tokenize},
};

/// Scores every document and returns up to `top_k` ranked keywords each.
pub(crate) fn score(corpus: &[String], top_k: usize) -> Vec<Vec<String>> {
    let stopwords = Stopwords::new();
    let tokenized: Vec<Vec<String>> = corpus.iter().map(|doc| tokenize(doc)).collect();

    // Candidate terms per document, and the vocabulary in first-occurrence
    // order across the corpus scan. The scan order is the tie-break.
    let mut vocab_order: HashMap<String, usize> = HashMap::new();
    let mut doc_terms: Vec<Vec<String>> = Vec::with_capacity(corpus.len());
    for tokens in &tokenized {
        let mut terms: Vec<String> = tokens
            .iter()
            .filter(|t| !stopwords.contains(t))
            .cloned()
            .collect();
        terms.extend(bigrams(tokens));
        for term in &terms {
            let next = vocab_order.len();
            vocab_order.entry(term.clone()).or_insert(next);
        }
        doc_terms.push(terms);
    }

    // Document frequency per candidate term.
    let mut df: HashMap<&str, usize> = HashMap::new();
    for terms in &doc_terms {
        let distinct: HashSet<&str> = terms.iter().map(String::as_str).collect();
        for term in distinct {
            *df.entry(term).or_insert(0) += 1;
        }
    }

    let n = corpus.len();
    doc_terms
        .iter()
        .map(|terms| rank_row(terms, &df, &vocab_order, n, top_k))
        .collect()
}

/// Ranks one document's candidate terms by `tf × idf` weight.
fn rank_row(
    terms: &[String],
    df: &HashMap<&str, usize>,
    vocab_order: &HashMap<String, usize>,
    n: usize,
    top_k: usize,
) -> Vec<String> {
    let mut tf: HashMap<&str, u32> = HashMap::new();
    for term in terms {
        *tf.entry(term).or_insert(0) += 1;
    }

    let mut row: Vec<(&str, f32)> = tf
        .into_iter()
        .map(|(term, count)| {
            let term_df = df.get(term).copied().unwrap_or(1);
            (term, count as f32 * smoothed_idf(n, term_df))
        })
        .filter(|(_, weight)| *weight > 0.0)
        .collect();

    row.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| vocab_order[a.0].cmp(&vocab_order[b.0]))
    });

    let mut seen = HashSet::new();
    row.into_iter()
        .filter(|(term, _)| seen.insert(*term))
        .take(top_k)
        .map(|(term, _)| term.to_string())
        .collect()
}
