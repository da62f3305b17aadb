//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Configuration error
    ConfigError(String),
    /// Marker table failed validation
    InvalidLexicon(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidLexicon(msg) => write!(f, "Invalid marker table: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CliError::FileNotFound("input.txt".to_string()).to_string(),
            "File not found: input.txt"
        );
        assert_eq!(
            CliError::ConfigError("unknown format".to_string()).to_string(),
            "Configuration error: unknown format"
        );
        assert_eq!(
            CliError::InvalidLexicon("marker #0 is blank".to_string()).to_string(),
            "Invalid marker table: marker #0 is blank"
        );
    }

    #[test]
    fn test_converts_into_anyhow() {
        let result: CliResult<()> = Err(CliError::FileNotFound("mga_tala.txt".to_string()).into());
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert_eq!(err.to_string(), "File not found: mga_tala.txt");
    }
}
