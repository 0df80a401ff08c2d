//! Full-screen backdrops and the title logo.

use crate::color::Rgba8;
use crate::layer::{Layer, Paint};
use crate::shape::{Rect, Rise, Shape};

const SKY: Rgba8 = Rgba8::rgb(135, 206, 235);
const FAR_PEAKS: Rgba8 = Rgba8::rgb(80, 80, 80);
const NEAR_PEAKS: Rgba8 = Rgba8::rgb(100, 100, 100);
const GRASS: Rgba8 = Rgba8::rgb(50, 100, 50);

/// A row of `count` identical peaks, each `width / count` wide, shifted left by
/// half a peak so the outer ones are cut by the raster edge.
fn mountain_range(width: i32, height: i32, count: i32, height_ratio: f64, color: Rgba8) -> Vec<Layer> {
    let span = width / count;
    let half_span = span / 2;
    (0..count)
        .map(|i| {
            let x0 = i * width / count - width / (count * 2);
            Layer::solid(
                Shape::Ridge {
                    x0,
                    x1: x0 + span,
                    center: x0 + half_span,
                    half_span,
                    peak: height as f64 * height_ratio,
                    anchor: height,
                    rise: Rise::Up,
                },
                color,
            )
        })
        .collect()
}

/// Sky, three far peaks, two near peaks, then grass over the bottom 30%.
pub(super) fn mountain_backdrop(width: u32, height: u32) -> Vec<Layer> {
    let w = i32::try_from(width).unwrap_or(i32::MAX);
    let h = i32::try_from(height).unwrap_or(i32::MAX);

    let mut layers = vec![Layer::solid(Shape::Full, SKY)];
    layers.extend(mountain_range(w, h, 3, 0.4, FAR_PEAKS));
    layers.extend(mountain_range(w, h, 2, 0.6, NEAR_PEAKS));
    layers.push(Layer::solid(
        Shape::rect(0, w, (h as f64 * 0.7) as i32, h),
        GRASS,
    ));
    layers
}

pub(super) fn fog() -> Vec<Layer> {
    vec![Layer {
        shape: Shape::Full,
        paint: Paint::Fog(Rgba8::rgb(200, 200, 200)),
    }]
}

/// Stylized "A", a mountain hanging from row 40 and a sun, on transparency.
pub(super) const LOGO: &[Layer] = &[
    Layer::solid(
        Shape::ellipse(Rect::new(20, 40, 20, 80), 30, 50, 100.0, 400.0, 1.0),
        Rgba8::rgb(50, 100, 200),
    ),
    Layer::solid(
        Shape::Ridge {
            x0: 60,
            x1: 200,
            center: 130,
            half_span: 70,
            peak: 60.0,
            anchor: 40,
            rise: Rise::Down,
        },
        NEAR_PEAKS,
    ),
    Layer::solid(
        Shape::disc(Rect::new(180, 200, 20, 40), 190, 30, 60.0),
        Rgba8::rgb(255, 255, 100),
    ),
];
