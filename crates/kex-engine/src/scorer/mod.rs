//! Scorer selection and dispatch.
//!
//! Two scoring implementations share one contract: given a corpus and a
//! keyword limit, produce one ranked, de-duplicated term list per document,
//! in input order.
//!
//! - **Vectorized**: corpus-wide TF-IDF over unigram and bigram candidates.
//!   Needs the `vectorized` cargo feature and its stop-word dependency.
//! - **Fallback**: document-frequency weighted unigram counts. No external
//!   dependencies; always available.
//!
//! Which one runs is detected once per process and cached; a corpus is never
//! scored by a mix of the two.

use std::{fmt, sync::OnceLock};

mod fallback;
#[cfg(feature = "vectorized")]
mod vectorized;

/// The scoring implementation active for this process.
///
/// Advisory only: both implementations honor the same output contract, so
/// callers may log the kind but must not branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerKind {
    /// TF-IDF term-document weighting with unigram+bigram candidates.
    Vectorized,
    /// Document-frequency weighted token counts, unigrams only.
    Fallback,
}

impl ScorerKind {
    /// Detects the available scorer, once per process.
    ///
    /// The result is cached in a `OnceLock`; repeated calls are cheap and
    /// always agree.
    pub fn detect() -> Self {
        static DETECTED: OnceLock<ScorerKind> = OnceLock::new();
        *DETECTED.get_or_init(|| {
            if cfg!(feature = "vectorized") {
                Self::Vectorized
            } else {
                Self::Fallback
            }
        })
    }

    /// Scores the corpus with this implementation.
    ///
    /// Callers must have validated the corpus and `top_k` already.
    pub(crate) fn score(self, corpus: &[String], top_k: usize) -> Vec<Vec<String>> {
        match self {
            #[cfg(feature = "vectorized")]
            Self::Vectorized => vectorized::score(corpus, top_k),
            // Without the feature the variant is never detected; route to
            // the fallback so the match stays total.
            #[cfg(not(feature = "vectorized"))]
            Self::Vectorized => fallback::score(corpus, top_k),
            Self::Fallback => fallback::score(corpus, top_k),
        }
    }
}

impl fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vectorized => write!(f, "vectorized"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// Smoothed inverse document frequency: `ln((n + 1) / (df + 1)) + 1`.
///
/// For any term present in the corpus, `1 <= df <= n`, so the logarithm's
/// argument lies in `[1, (n + 1) / 2]` and the result is finite and at
/// least 1. Terms shared by every document bottom out at exactly 1.
pub(crate) fn smoothed_idf(n: usize, df: usize) -> f32 {
    ((n as f32 + 1.0) / (df as f32 + 1.0)).ln() + 1.0
}
