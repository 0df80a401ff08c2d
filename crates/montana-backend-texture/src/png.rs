//! Deterministic PNG writer for sprite previews.
//!
//! Uses fixed compression settings so the same grid always encodes to the
//! same file bytes. The renderer never sees PNG; this is for inspecting
//! sprites outside the game.

use std::io::Write;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};

use crate::encode::encode;
use crate::error::{TextureError, TextureResult};
use crate::grid::PixelGrid;

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Smallest files; pixel art compresses well with Paeth.
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }

    /// Fastest encode, larger files.
    pub fn fast() -> Self {
        Self {
            compression: Compression::Fast,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write a grid as an RGBA PNG to any writer.
pub fn write_grid_to_writer<W: Write>(
    grid: &PixelGrid,
    writer: W,
    config: &PngConfig,
) -> TextureResult<()> {
    let (width, height) = grid.dimensions();
    if width == 0 || height == 0 {
        return Err(TextureError::InvalidDimensions(format!(
            "cannot encode a {}x{} PNG",
            width, height
        )));
    }

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    // The png crate adds no timestamps or other variable metadata.
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&encode(grid).bytes)?;

    Ok(())
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode to a `Vec<u8>` and return it with its hash.
pub fn write_grid_to_vec_with_hash(
    grid: &PixelGrid,
    config: &PngConfig,
) -> TextureResult<(Vec<u8>, String)> {
    let mut data = Vec::new();
    write_grid_to_writer(grid, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba8;

    fn gradient() -> PixelGrid {
        let mut grid = PixelGrid::transparent(64, 64);
        for y in 0..64 {
            for x in 0..64 {
                grid.put(x, y, Rgba8::rgb((x * 4) as u8, (y * 4) as u8, 128));
            }
        }
        grid
    }

    #[test]
    fn test_png_deterministic() {
        let grid = gradient();
        let config = PngConfig::default();

        let (data1, hash1) = write_grid_to_vec_with_hash(&grid, &config).unwrap();
        let (data2, hash2) = write_grid_to_vec_with_hash(&grid, &config).unwrap();

        assert_eq!(data1, data2, "PNG data should be identical");
        assert_eq!(hash1, hash2, "PNG hashes should be identical");
        assert_eq!(&data1[1..4], b"PNG");
    }

    #[test]
    fn test_empty_grid_rejected() {
        let grid = PixelGrid::transparent(0, 4);
        let err = write_grid_to_vec_with_hash(&grid, &PngConfig::fast()).unwrap_err();
        assert!(matches!(err, TextureError::InvalidDimensions(_)));
    }

    #[test]
    fn test_best_compression_not_larger_on_flat_image() {
        let grid = PixelGrid::new(64, 64, Rgba8::rgb(10, 20, 30));
        let (fast, _) = write_grid_to_vec_with_hash(&grid, &PngConfig::fast()).unwrap();
        let (best, _) = write_grid_to_vec_with_hash(&grid, &PngConfig::best_compression()).unwrap();
        assert!(best.len() <= fast.len());
    }
}
