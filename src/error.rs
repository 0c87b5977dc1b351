//! Error types for task-intent.
//!
//! Parsing itself never fails: a phase either hits or misses. Errors only
//! arise while building a parser from a keyword table or in the ambient
//! surface (configuration, files, output).

use thiserror::Error;

/// Errors produced by task-intent.
#[derive(Debug, Error)]
pub enum IntentError {
    /// Configuration could not be read, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A keyword table failed validation.
    #[error("Invalid keyword table: {0}")]
    InvalidKeywords(String),

    /// A pattern compiled from a keyword table was rejected by the regex engine.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A command-line argument could not be interpreted.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML (de)serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IntentError::InvalidKeywords("empty keyword in priority.high".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid keyword table: empty keyword in priority.high"
        );

        let err = IntentError::Config("missing home".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing home");
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: IntentError = io.into();
        assert!(matches!(err, IntentError::Io(_)));
    }
}
