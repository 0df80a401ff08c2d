//! Region membership predicates.
//!
//! Every shape is a per-pixel boolean test over integer coordinates. Shapes
//! other than [`Shape::Full`] and [`Shape::Ridge`] are only evaluated inside a
//! scan box, mirroring how the sprites were laid out by hand: the box bounds
//! the search, the predicate carves the silhouette out of it.

/// Half-open rectangle `[x0, x1) x [y0, y1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub x1: i32,
    pub y0: i32,
    pub y1: i32,
}

impl Rect {
    /// Columns `x0..x1`, rows `y0..y1`.
    pub const fn new(x0: i32, x1: i32, y0: i32, y1: i32) -> Self {
        Self { x0, x1, y0, y1 }
    }

    /// A single pixel.
    pub const fn pixel(x: i32, y: i32) -> Self {
        Self::new(x, x + 1, y, y + 1)
    }

    /// Whether `(x, y)` lies inside.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    /// Intersection with a `width x height` raster anchored at the origin.
    pub fn clip(&self, width: u32, height: u32) -> Rect {
        let w = i32::try_from(width).unwrap_or(i32::MAX);
        let h = i32::try_from(height).unwrap_or(i32::MAX);
        Rect::new(
            self.x0.max(0),
            self.x1.min(w),
            self.y0.max(0),
            self.y1.min(h),
        )
    }
}

/// Direction a [`Shape::Ridge`] grows from its anchor row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rise {
    /// Column spans `[anchor - h, anchor)`: a mountain standing on the ground.
    Up,
    /// Column spans `[anchor, anchor + h)`: a silhouette hanging from a line.
    Down,
}

/// A region of the raster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Every pixel of the raster.
    Full,
    /// Axis-aligned rectangle.
    Rect(Rect),
    /// `(x - cx)^2 / a + (y - cy)^2 / b < r` inside `scan`.
    Ellipse {
        scan: Rect,
        cx: i32,
        cy: i32,
        a: f64,
        b: f64,
        r: f64,
    },
    /// `|x - cx| < half_width - (y - top) / slope` inside `scan`: a pair of
    /// legs narrowing toward the feet.
    Taper {
        scan: Rect,
        cx: i32,
        top: i32,
        half_width: f64,
        slope: f64,
    },
    /// Triangular silhouette over columns `x0..x1`. Column `x` has height
    /// `trunc(peak * (1 - |x - center| / half_span))` measured from `anchor`
    /// in the `rise` direction.
    Ridge {
        x0: i32,
        x1: i32,
        center: i32,
        half_span: i32,
        peak: f64,
        anchor: i32,
        rise: Rise,
    },
}

impl Shape {
    /// Rectangle covering columns `x0..x1`, rows `y0..y1`.
    pub const fn rect(x0: i32, x1: i32, y0: i32, y1: i32) -> Self {
        Shape::Rect(Rect::new(x0, x1, y0, y1))
    }

    /// A single pixel.
    pub const fn pixel(x: i32, y: i32) -> Self {
        Shape::Rect(Rect::pixel(x, y))
    }

    /// Normalized ellipse test inside a scan box.
    pub const fn ellipse(scan: Rect, cx: i32, cy: i32, a: f64, b: f64, r: f64) -> Self {
        Shape::Ellipse {
            scan,
            cx,
            cy,
            a,
            b,
            r,
        }
    }

    /// Disc of squared radius `r2` centred on `(cx, cy)` inside a scan box.
    pub const fn disc(scan: Rect, cx: i32, cy: i32, r2: f64) -> Self {
        Self::ellipse(scan, cx, cy, 1.0, 1.0, r2)
    }

    /// Legs narrowing by one pixel every `slope` rows below `top`.
    pub const fn taper(scan: Rect, cx: i32, top: i32, half_width: f64, slope: f64) -> Self {
        Shape::Taper {
            scan,
            cx,
            top,
            half_width,
            slope,
        }
    }

    /// Whether `(x, y)` belongs to the shape.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        match *self {
            Shape::Full => true,
            Shape::Rect(rect) => rect.contains(x, y),
            Shape::Ellipse {
                scan,
                cx,
                cy,
                a,
                b,
                r,
            } => {
                if !scan.contains(x, y) {
                    return false;
                }
                let dx = (x - cx) as f64;
                let dy = (y - cy) as f64;
                dx * dx / a + dy * dy / b < r
            }
            Shape::Taper {
                scan,
                cx,
                top,
                half_width,
                slope,
            } => {
                if !scan.contains(x, y) {
                    return false;
                }
                ((x - cx).abs() as f64) < half_width - (y - top) as f64 / slope
            }
            Shape::Ridge {
                x0,
                x1,
                anchor,
                rise,
                ..
            } => {
                if x < x0 || x >= x1 {
                    return false;
                }
                let h = self.ridge_height(x);
                match rise {
                    Rise::Up => y >= anchor - h && y < anchor,
                    Rise::Down => y >= anchor && y < anchor + h,
                }
            }
        }
    }

    /// Column height of a ridge; zero for every other shape.
    pub fn ridge_height(&self, x: i32) -> i32 {
        match *self {
            Shape::Ridge {
                center,
                half_span,
                peak,
                ..
            } if half_span > 0 => {
                let distance = (x - center).abs() as f64 / half_span as f64;
                (peak * (1.0 - distance)) as i32
            }
            _ => 0,
        }
    }

    /// Smallest rectangle outside of which [`Shape::contains`] is always false,
    /// clipped to a `width x height` raster.
    pub fn bounds(&self, width: u32, height: u32) -> Rect {
        let full = Rect::new(0, i32::MAX, 0, i32::MAX);
        let rect = match *self {
            Shape::Full => full,
            Shape::Rect(rect) => rect,
            Shape::Ellipse { scan, .. } | Shape::Taper { scan, .. } => scan,
            Shape::Ridge { x0, x1, .. } => Rect::new(x0, x1, 0, i32::MAX),
        };
        rect.clip(width, height)
    }
}
