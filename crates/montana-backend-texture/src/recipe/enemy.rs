//! Four-legged enemies, drawn facing left. Both 32x32.

use crate::color::Rgba8;
use crate::layer::Layer;
use crate::shape::{Rect, Shape};

/// Body, legs, head and two single-pixel eyes. Wolf and bear only differ in
/// proportions and palette.
const fn quadruped(body_a: f64, fur: Rgba8, legs: Rgba8, eyes: Rgba8) -> [Layer; 6] {
    [
        Layer::solid(
            Shape::ellipse(Rect::new(8, 24, 10, 25), 16, 18, body_a, 10.0, 10.0),
            fur,
        ),
        Layer::solid(Shape::rect(10, 13, 25, 30), legs),
        Layer::solid(Shape::rect(19, 22, 25, 30), legs),
        Layer::solid(Shape::disc(Rect::new(5, 15, 5, 15), 10, 10, 20.0), fur),
        Layer::solid(Shape::pixel(8, 8), eyes),
        Layer::solid(Shape::pixel(12, 8), eyes),
    ]
}

pub(super) const WOLF: &[Layer] = &quadruped(
    20.0,
    Rgba8::rgb(100, 100, 100),
    Rgba8::rgb(80, 80, 80),
    Rgba8::rgb(200, 50, 50),
);

pub(super) const BEAR: &[Layer] = &quadruped(
    15.0,
    Rgba8::rgb(120, 80, 50),
    Rgba8::rgb(100, 60, 30),
    Rgba8::rgb(20, 20, 20),
);
