//! Error types for the keyword engine.

use thiserror::Error;

/// Errors that can occur when scoring a corpus.
///
/// Both variants are structural: they are raised before any document is
/// scored and abort the whole batch. Per-document edge cases (a document
/// with no qualifying terms) are not errors and yield an empty keyword list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The corpus contained no documents.
    #[error("cannot extract keywords from an empty corpus")]
    EmptyCorpus,

    /// The requested keyword count was below one.
    #[error("top_k must be at least 1, got {top_k}")]
    InvalidTopK {
        /// The rejected value.
        top_k: usize,
    },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            EngineError::EmptyCorpus.to_string(),
            "cannot extract keywords from an empty corpus"
        );
        assert_eq!(
            EngineError::InvalidTopK { top_k: 0 }.to_string(),
            "top_k must be at least 1, got 0"
        );
    }
}
