//! Error types for chainlint operations

use thiserror::Error;

use crate::frontend::ParseError;

/// Main error type for chainlint operations.
#[derive(Error, Debug)]
pub enum LintError {
    /// Source text could not be parsed into modifier chains
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Configuration could not be loaded or deserialized
    #[error("Config error: {0}")]
    Config(String),

    /// A file could not be read
    #[error("I/O error reading `{path}`: {source}")]
    Io {
        /// Path of the file that failed
        path: String,

        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for chainlint operations.
pub type Result<T> = std::result::Result<T, LintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = LintError::Config("missing field `category`".to_string());
        assert_eq!(err.to_string(), "Config error: missing field `category`");
    }

    #[test]
    fn test_parse_error_converts() {
        let err: LintError = ParseError::new("unexpected token").into();
        assert!(matches!(err, LintError::Parse(_)));
    }
}
