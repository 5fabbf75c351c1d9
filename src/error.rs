//! Error types for the socialnorm library.
//!
//! All fatal errors are represented by the [`NormalizeError`] enum. Conditions
//! the pipeline recovers from (an unmapped emoji, a token that becomes empty
//! after ASCII folding) are not errors; they are reported through
//! [`Diagnostics`](crate::analysis::diagnostic::Diagnostics) instead.
//!
//! # Examples
//!
//! ```
//! use socialnorm::config::UrlMode;
//! use socialnorm::error::NormalizeError;
//!
//! let err = "shorten".parse::<UrlMode>().unwrap_err();
//! assert!(matches!(err, NormalizeError::InvalidConfig { .. }));
//! assert_eq!(err.to_string(), "Invalid configuration: url_mode = \"shorten\"");
//! ```

use std::io;

use thiserror::Error;

/// The main error type for socialnorm operations.
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// An undefined value for one of the configuration axes.
    #[error("Invalid configuration: {setting} = {value:?}")]
    InvalidConfig {
        /// Name of the configuration setting.
        setting: String,
        /// The rejected value, verbatim.
        value: String,
    },

    /// Lookup table errors (bad pattern, empty canonical term, ...)
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Analysis-related errors (a stage failed while processing a document)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A source record is missing the field that holds its text
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Regex compilation errors
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Backreference/lookaround regex errors
    #[error("Regex error: {0}")]
    FancyRegex(#[from] fancy_regex::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with NormalizeError.
pub type Result<T> = std::result::Result<T, NormalizeError>;

impl NormalizeError {
    /// Create a new invalid configuration error.
    pub fn invalid_config<S: Into<String>, V: Into<String>>(setting: S, value: V) -> Self {
        NormalizeError::InvalidConfig {
            setting: setting.into(),
            value: value.into(),
        }
    }

    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        NormalizeError::Lexicon(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        NormalizeError::Analysis(msg.into())
    }

    /// Create a new missing field error.
    pub fn missing_field<S: Into<String>>(field: S) -> Self {
        NormalizeError::MissingField(field.into())
    }

    /// Whether this error stems from configuration rather than input data.
    pub fn is_config_error(&self) -> bool {
        matches!(self, NormalizeError::InvalidConfig { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = NormalizeError::lexicon("empty canonical term");
        assert_eq!(error.to_string(), "Lexicon error: empty canonical term");

        let error = NormalizeError::analysis("backtrack limit");
        assert_eq!(error.to_string(), "Analysis error: backtrack limit");

        let error = NormalizeError::invalid_config("mention_mode", "handle");
        assert!(error.is_config_error());
        assert_eq!(
            error.to_string(),
            "Invalid configuration: mention_mode = \"handle\""
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = NormalizeError::from(io_error);

        match error {
            NormalizeError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
