//! RGBA8 byte encoding for the renderer boundary.

use std::fmt;

use crate::color::Rgba8;
use crate::error::{TextureError, TextureResult};
use crate::grid::PixelGrid;

/// Pixel layout of an encoded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 8 bits per channel, R, G, B, A order.
    Rgba8,
}

impl PixelFormat {
    /// Bytes per pixel.
    pub const fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelFormat::Rgba8 => 4,
        }
    }

    /// Format name understood by the renderer.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PixelFormat::Rgba8 => "RGBA8",
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An encoded texture: what the renderer uploads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureData {
    /// Row-major pixel bytes, top row first.
    pub bytes: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel layout.
    pub format: PixelFormat,
}

impl TextureData {
    /// Wraps raw RGBA8 bytes, checking the length against the dimensions.
    pub fn from_raw(bytes: Vec<u8>, width: u32, height: u32) -> TextureResult<Self> {
        let expected = expected_len(width, height, PixelFormat::Rgba8);
        if bytes.len() != expected {
            return Err(TextureError::BufferSize {
                width,
                height,
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            bytes,
            width,
            height,
            format: PixelFormat::Rgba8,
        })
    }

    /// Rebuilds the pixel grid.
    pub fn to_grid(&self) -> PixelGrid {
        let mut grid = PixelGrid::transparent(self.width, self.height);
        let row_len = self.width as usize;
        for (i, px) in self.bytes.chunks_exact(4).enumerate() {
            let x = (i % row_len.max(1)) as i32;
            let y = (i / row_len.max(1)) as i32;
            grid.put(x, y, Rgba8::from_bytes([px[0], px[1], px[2], px[3]]));
        }
        grid
    }

    /// BLAKE3 hash of the pixel bytes.
    pub fn pixel_hash(&self) -> String {
        blake3::hash(&self.bytes).to_hex().to_string()
    }
}

fn expected_len(width: u32, height: u32, format: PixelFormat) -> usize {
    width as usize * height as usize * format.bytes_per_pixel()
}

/// Flattens a grid into row-major RGBA8 bytes, row 0 first.
///
/// The output is exactly `width * height * 4` bytes long.
pub fn encode(grid: &PixelGrid) -> TextureData {
    let (width, height) = grid.dimensions();
    let mut bytes = Vec::with_capacity(expected_len(width, height, PixelFormat::Rgba8));
    for row in grid.rows() {
        for pixel in row {
            bytes.extend_from_slice(&pixel.to_bytes());
        }
    }
    debug_assert_eq!(bytes.len(), expected_len(width, height, PixelFormat::Rgba8));

    TextureData {
        bytes,
        width,
        height,
        format: PixelFormat::Rgba8,
    }
}
