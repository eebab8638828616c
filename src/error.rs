//! Error types for Stemma.
//!
//! Only configuration-time resolution can fail. Every built-in token filter
//! is a total function over its input stream, so [`StemmaError::Analysis`]
//! exists for custom [`Filter`](crate::analysis::token_filter::Filter) and
//! [`Tokenizer`](crate::analysis::tokenizer::Tokenizer) implementations.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Stemma operations.
#[derive(Error, Debug)]
pub enum StemmaError {
    /// A word list or analyzer setting could not be resolved.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A declared word-list file could not be read.
    #[error("Failed to read word list '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON configuration document could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A custom tokenizer or filter failed.
    #[error("Analysis error: {0}")]
    Analysis(String),
}

impl StemmaError {
    /// Create a new configuration error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        StemmaError::InvalidConfig(msg.into())
    }

    /// Create a new I/O error bound to the file it came from.
    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        StemmaError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        StemmaError::Analysis(msg.into())
    }
}

/// Result type alias for operations that may fail with [`StemmaError`].
pub type Result<T> = std::result::Result<T, StemmaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = StemmaError::io(
            "/nonexistent/stopwords.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/nonexistent/stopwords.txt"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_invalid_config_message() {
        let err = StemmaError::invalid_config("unknown language 'klingon'");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: unknown language 'klingon'"
        );
    }
}
