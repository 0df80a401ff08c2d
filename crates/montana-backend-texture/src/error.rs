//! Error types for the texture backend.

use montana_spec::BackendError;
use thiserror::Error;

/// Result type for texture operations.
pub type TextureResult<T> = Result<T, TextureError>;

/// Errors that can occur while exporting textures.
///
/// Synthesis itself is total; only byte-level import and PNG export can fail.
#[derive(Debug, Error)]
pub enum TextureError {
    /// Raw buffer length does not match the declared dimensions.
    #[error("expected {expected} bytes for {width}x{height} RGBA8, got {actual}")]
    BufferSize {
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
        /// Required byte length.
        expected: usize,
        /// Supplied byte length.
        actual: usize,
    },

    /// PNG export of an empty raster.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// PNG encoder failure.
    #[error("PNG encoding error: {0}")]
    Encoding(#[from] ::png::EncodingError),
}

impl BackendError for TextureError {
    fn code(&self) -> &'static str {
        match self {
            TextureError::BufferSize { .. } => "TEXTURE_001",
            TextureError::InvalidDimensions(_) => "TEXTURE_002",
            TextureError::Encoding(_) => "TEXTURE_003",
        }
    }

    fn category(&self) -> &'static str {
        "texture"
    }
}
