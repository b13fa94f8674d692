//! Keyword scoring engine for short FAQ corpora.
//!
//! Given an in-memory batch of question strings, the engine produces one
//! ranked, de-duplicated list of up to `top_k` representative terms per
//! question, in input order. Two implementations share that contract:
//!
//! 1. **Vectorized** (preferred): corpus-wide TF-IDF with unigram and bigram
//!    candidates, behind the default-on `vectorized` cargo feature.
//! 2. **Fallback**: document-frequency weighted token counts, unigrams only,
//!    no external dependencies.
//!
//! The available implementation is detected once per process (see
//! [`ScorerKind::detect`]) and used for the whole batch. Each call is a pure
//! function of the corpus and `top_k`: term weights are recomputed from
//! scratch every time, and nothing but the detection result is cached.
//!
//! ```
//! use kex_engine::extract_keywords;
//!
//! let corpus = vec![
//!     "How do I reset my password?".to_string(),
//!     "Where is the office parking?".to_string(),
//! ];
//! let keywords = extract_keywords(&corpus, 3).unwrap();
//! assert_eq!(keywords.len(), 2);
//! ```

#![warn(missing_docs)]

mod error;
mod scorer;
mod stopwords;
mod token;

pub use error::EngineError;
pub use scorer::ScorerKind;
#[cfg(feature = "vectorized")]
pub use stopwords::Stopwords;

/// Default maximum number of keywords per document.
pub const DEFAULT_TOP_K: usize = 7;

/// Extracts up to `top_k` ranked keywords for each document in `corpus`.
///
/// The output has exactly one list per input document, in input order. A
/// document that yields no qualifying terms (nothing but stop words, digits,
/// or single letters) gets an empty list rather than an error.
///
/// # Errors
///
/// - [`EngineError::EmptyCorpus`] if `corpus` has no documents.
/// - [`EngineError::InvalidTopK`] if `top_k` is zero.
pub fn extract_keywords(corpus: &[String], top_k: usize) -> Result<Vec<Vec<String>>, EngineError> {
    if corpus.is_empty() {
        return Err(EngineError::EmptyCorpus);
    }
    if top_k < 1 {
        return Err(EngineError::InvalidTopK { top_k });
    }
    Ok(ScorerKind::detect().score(corpus, top_k))
}
