//! In-memory pixel grid.

use crate::color::Rgba8;

/// A width x height raster of [`Rgba8`] pixels.
///
/// Pixels are stored row-major in one vector of exactly `width * height`
/// entries, so every row has the same width by construction. Row 0 is the top
/// of the raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    data: Vec<Rgba8>,
}

impl PixelGrid {
    /// Create a grid filled with a color.
    pub fn new(width: u32, height: u32, fill: Rgba8) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a fully transparent grid.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self::new(width, height, Rgba8::TRANSPARENT)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x < self.width && y < self.height {
            Some(self.data[self.index(x, y)])
        } else {
            None
        }
    }

    /// Write a pixel at signed coordinates.
    ///
    /// Returns `false` and leaves the grid untouched when `(x, y)` lies outside.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: Rgba8) -> bool {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return false;
        }
        let idx = self.index(x as u32, y as u32);
        self.data[idx] = color;
        true
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Rgba8] {
        &self.data
    }

    /// Iterate over rows, top first.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgba8]> {
        // chunks_exact panics on 0; an empty-width grid has no rows either way.
        self.data.chunks_exact(self.width.max(1) as usize)
    }

    /// Whether every pixel is fully transparent.
    pub fn is_fully_transparent(&self) -> bool {
        self.data.iter().all(Rgba8::is_transparent)
    }

    /// Number of pixels with non-zero alpha.
    pub fn opaque_count(&self) -> usize {
        self.data.iter().filter(|p| !p.is_transparent()).count()
    }

    /// Mirror the grid left to right (for sprites facing the other way).
    pub fn flip_horizontal(&self) -> PixelGrid {
        let mut data = self.data.clone();
        if self.width > 0 {
            for row in data.chunks_exact_mut(self.width as usize) {
                row.reverse();
            }
        }
        PixelGrid {
            width: self.width,
            height: self.height,
            data,
        }
    }
}
