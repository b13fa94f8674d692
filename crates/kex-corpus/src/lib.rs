//! FAQ record loading, cleaning, and persistence for kex.
//!
//! This crate handles the surrounding plumbing of keyword extraction: the
//! `{question, answer}` records produced by an upstream document converter,
//! the `{question, keywords}` records consumed downstream, and the emoji
//! stripping applied to text lifted from word-processor files. No scoring
//! logic lives here.

#![warn(missing_docs)]

mod clean;
mod error;

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

pub use clean::clean_text;
pub use error::CorpusError;

/// One question/answer pair from the FAQ source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqRecord {
    /// The question text.
    pub question: String,
    /// The answer text.
    pub answer: String,
}

/// One question with its extracted keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqKeywords {
    /// The question text, unchanged from the input record.
    pub question: String,
    /// Ranked keywords for the question, best first.
    pub keywords: Vec<String>,
}

/// Loads FAQ records from a JSON array file.
///
/// # Errors
///
/// Returns [`CorpusError::ReadFile`] if the file cannot be read and
/// [`CorpusError::ParseJson`] if it is not a JSON array of records.
pub fn load_records(path: &Path) -> Result<Vec<FaqRecord>, CorpusError> {
    let contents = fs::read_to_string(path).map_err(|source| CorpusError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CorpusError::ParseJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes keyword records as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`CorpusError::WriteFile`] if the file cannot be written.
pub fn write_keywords(path: &Path, records: &[FaqKeywords]) -> Result<(), CorpusError> {
    let json = to_json(records);
    fs::write(path, json).map_err(|source| CorpusError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders keyword records as pretty-printed JSON.
pub fn to_json(records: &[FaqKeywords]) -> String {
    // Serialization of plain strings and vectors cannot fail.
    serde_json::to_string_pretty(records).unwrap_or_default()
}
