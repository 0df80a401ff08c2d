//! Error types for the audio backend.

use montana_spec::BackendError;
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while encoding audio.
///
/// Synthesis itself never fails: degenerate requests yield an empty buffer.
/// Errors only arise at the container boundary.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The PCM payload does not fit in a 32-bit RIFF size field.
    #[error("clip of {samples} samples is too long for a WAV container")]
    ClipTooLong {
        /// Number of samples in the clip.
        samples: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::ClipTooLong { .. } => "AUDIO_001",
            AudioError::Io(_) => "AUDIO_002",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_code() {
        let err = AudioError::from(std::io::Error::other("disk full"));
        assert!(err.to_string().contains("disk full"));
        assert_eq!(err.code(), "AUDIO_002");
        assert_eq!(err.category(), "audio");
    }

    #[test]
    fn test_too_long_code() {
        let err = AudioError::ClipTooLong { samples: 1 << 31 };
        assert_eq!(err.code(), "AUDIO_001");
        assert!(err.to_string().contains("2147483648"));
    }
}
