//! Core error types

use thiserror::Error;

/// Errors raised while loading or compiling marker and polarity tables
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    /// A table could not be parsed
    #[error("failed to parse {table} table: {reason}")]
    Parse {
        /// Name or path of the offending table
        table: String,
        /// Parser message
        reason: String,
    },

    /// A table could not be read from disk
    #[error("failed to read {path}: {reason}")]
    Read {
        /// Path of the table file
        path: String,
        /// I/O message
        reason: String,
    },

    /// Table contents violate an invariant
    #[error("invalid {table} table: {reason}")]
    Invalid {
        /// Table code
        table: String,
        /// What is wrong with it
        reason: String,
    },

    /// No markers were supplied at all
    #[error("marker lexicon is empty")]
    Empty,

    /// The compiled matcher was rejected by the regex engine
    #[error("failed to compile marker matcher: {0}")]
    Pattern(String),
}

impl From<regex::Error> for LexiconError {
    fn from(err: regex::Error) -> Self {
        LexiconError::Pattern(err.to_string())
    }
}

/// Failure reported by a [`Classifier`](crate::classifier::Classifier)
///
/// The pipeline never retries or suppresses these; they reach the caller as-is.
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// The classifier rejected the input text
    #[error("classifier rejected input: {0}")]
    Rejected(String),

    /// The classifier produced a label outside the closed label set
    #[error("unknown sentiment label: {0}")]
    UnknownLabel(String),

    /// Backend-specific failure
    #[error(transparent)]
    Backend(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type for lexicon operations
pub type Result<T> = std::result::Result<T, LexiconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_error_display() {
        let err = LexiconError::Parse {
            table: "tagalog".to_string(),
            reason: "expected `=`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse tagalog table: expected `=`"
        );
        assert_eq!(LexiconError::Empty.to_string(), "marker lexicon is empty");
    }

    #[test]
    fn test_backend_error_is_transparent() {
        let inner: Box<dyn std::error::Error + Send + Sync> = "model not loaded".into();
        let err = ClassifierError::from(inner);
        assert_eq!(err.to_string(), "model not loaded");
    }
}
