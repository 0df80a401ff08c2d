//! Pickups. All 32x32.

use crate::color::Rgba8;
use crate::layer::Layer;
use crate::shape::{Rect, Shape};

const CORK: Rgba8 = Rgba8::rgb(100, 100, 100);

const fn bottle(color: Rgba8) -> Layer {
    Layer::solid(
        Shape::ellipse(Rect::new(12, 20, 10, 25), 16, 18, 10.0, 20.0, 5.0),
        color,
    )
}

pub(super) const POTION_HEALTH: &[Layer] = &[
    bottle(Rgba8::rgb(200, 50, 50)),
    Layer::solid(Shape::rect(14, 18, 8, 10), CORK),
];

pub(super) const POTION_MANA: &[Layer] = &[
    bottle(Rgba8::rgb(50, 50, 200)),
    Layer::solid(Shape::rect(14, 18, 8, 10), CORK),
];

pub(super) const FOOD: &[Layer] = &[
    // Apple and stem
    Layer::solid(
        Shape::disc(Rect::new(10, 22, 10, 22), 16, 16, 30.0),
        Rgba8::rgb(200, 50, 50),
    ),
    Layer::solid(Shape::rect(15, 17, 8, 10), Rgba8::rgb(100, 70, 50)),
];

pub(super) const SWORD: &[Layer] = &[
    Layer::solid(Shape::rect(14, 18, 20, 30), Rgba8::rgb(120, 80, 50)),
    Layer::solid(
        Shape::ellipse(Rect::new(12, 20, 10, 20), 16, 15, 5.0, 15.0, 5.0),
        Rgba8::rgb(150, 150, 150),
    ),
    // Pommel
    Layer::solid(Shape::rect(14, 18, 30, 32), Rgba8::rgb(200, 200, 100)),
];
