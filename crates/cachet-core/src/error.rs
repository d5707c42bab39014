//! Error types for the cachet-core library.

use thiserror::Error;

/// Main error type for the cachet library.
#[derive(Error, Debug)]
pub enum CachetError {
    /// Record extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to record extraction from result logs.
///
/// Every variant is fatal to the scan: there is no per-line recovery or
/// skip-and-continue policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The line has fewer than three comma-delimited fields.
    #[error("line {line}: expected at least 3 comma-delimited fields, found {fields}")]
    MalformedLine { line: usize, fields: usize },

    /// A size or stride field contains no digit-only token.
    #[error("line {line}: no numeric token in {field} field")]
    MissingNumericToken { line: usize, field: &'static str },

    /// The time field contains no token that parses as a float.
    #[error("line {line}: no parseable time value")]
    NoParseableTime { line: usize },
}

impl ExtractionError {
    /// The 1-based input line the error was raised on.
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedLine { line, .. }
            | Self::MissingNumericToken { line, .. }
            | Self::NoParseableTime { line } => *line,
        }
    }
}

/// Result type for the cachet library.
pub type Result<T> = std::result::Result<T, CachetError>;
