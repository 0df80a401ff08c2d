//! Draw layers and compositing.

use crate::color::Rgba8;
use crate::grid::PixelGrid;
use crate::shape::Shape;

/// Color source for a layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// One color for every covered pixel.
    Solid(Rgba8),
    /// Drifting fog: `color` with per-pixel alpha
    /// `clamp(80 + trunc(20 * sin(x / 20) * cos(y / 30)), 50, 120)`.
    Fog(Rgba8),
}

impl Paint {
    /// Color of the paint at `(x, y)`.
    pub fn at(&self, x: i32, y: i32) -> Rgba8 {
        match *self {
            Paint::Solid(color) => color,
            Paint::Fog(color) => {
                let noise = (20.0 * (x as f64 / 20.0).sin() * (y as f64 / 30.0).cos()) as i32;
                let alpha = (80 + noise).clamp(50, 120);
                color.with_alpha(alpha as u8)
            }
        }
    }
}

/// One `(shape, paint)` draw operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    pub shape: Shape,
    pub paint: Paint,
}

impl Layer {
    /// A layer painted in a single color.
    pub const fn solid(shape: Shape, color: Rgba8) -> Self {
        Self {
            shape,
            paint: Paint::Solid(color),
        }
    }

    /// Stamp the layer onto a grid, overwriting every covered pixel.
    ///
    /// Returns the number of pixels written. Coordinates outside the grid are
    /// skipped.
    pub fn apply(&self, grid: &mut PixelGrid) -> usize {
        let (width, height) = grid.dimensions();
        let bounds = self.shape.bounds(width, height);
        let mut written = 0;
        for y in bounds.y0..bounds.y1 {
            for x in bounds.x0..bounds.x1 {
                if self.shape.contains(x, y) && grid.put(x, y, self.paint.at(x, y)) {
                    written += 1;
                }
            }
        }
        written
    }
}

/// Apply layers in order. Later layers win; there is no alpha blending.
pub fn compose(grid: &mut PixelGrid, layers: &[Layer]) {
    for layer in layers {
        layer.apply(grid);
    }
}
