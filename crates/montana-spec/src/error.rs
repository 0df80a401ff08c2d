//! Error types for request parsing and validation.

use thiserror::Error;

/// Result type for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors raised when a request does not belong to the asset vocabulary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecError {
    /// Sprite kind name is not part of the closed vocabulary.
    #[error("unknown sprite kind '{0}'")]
    UnknownSpriteKind(String),

    /// Sound name is not part of the closed vocabulary.
    #[error("unknown sound '{0}'")]
    UnknownSound(String),

    /// Cue tone name is not part of the closed vocabulary.
    #[error("unknown cue tone '{0}'")]
    UnknownCueTone(String),

    /// Sprite category name is not recognized.
    #[error("unknown sprite category '{0}'")]
    UnknownCategory(String),

    /// Frame suffix could not be parsed.
    #[error("invalid frame '{0}': expected a non-negative integer")]
    InvalidFrame(String),

    /// Configuration value out of range.
    #[error("invalid config field '{field}': {message}")]
    InvalidConfig {
        /// Offending field.
        field: &'static str,
        /// What is wrong with it.
        message: String,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse config: {0}")]
    ConfigParse(String),
}

impl SpecError {
    /// Creates an invalid config error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            message: message.into(),
        }
    }
}

/// Trait implemented by every backend error so the CLI can report failures
/// uniformly.
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "AUDIO_001" or "TEXTURE_002". Codes are
    /// stable and can be matched on programmatically.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the backend category ("audio", "texture").
    fn category(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_helper() {
        let err = SpecError::invalid_config("sample_rate", "must be greater than zero");
        let text = err.to_string();
        assert!(text.contains("sample_rate"));
        assert!(text.contains("greater than zero"));
    }

    #[test]
    fn test_unknown_kind_message() {
        let err = SpecError::UnknownSpriteKind("dragon".to_string());
        assert_eq!(err.to_string(), "unknown sprite kind 'dragon'");
    }
}
