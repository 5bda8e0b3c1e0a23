//! Error types for the parse boundary and document helpers.
//!
//! The shape algorithms themselves are total and never return these; errors
//! only arise while turning editor text into a [`serde_json::Value`] or back.

use std::fmt;

use thiserror::Error;

/// Which of the two paired buffers a document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The original-language document (e.g. `ja.json`).
    Source,
    /// The document being translated into (e.g. `en.json`).
    Translation,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => f.write_str("source"),
            Side::Translation => f.write_str("translation"),
        }
    }
}

/// Errors that can occur around the shape algorithms.
#[derive(Error, Debug)]
pub enum LocError {
    /// The buffer was not valid JSON. Line and column are 1-based.
    #[error("{side} JSON syntax error at line {line}, column {column}: {message}")]
    Syntax {
        side: Side,
        line: usize,
        column: usize,
        message: String,
    },

    /// A value could not be rendered back to JSON text.
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The translation language suffix was empty after trimming.
    #[error("invalid translation language: {0:?}")]
    InvalidLanguage(String),
}

/// Convenience alias used throughout locjson-core.
pub type Result<T> = std::result::Result<T, LocError>;
