//! Characters: the three friends, the hunter and the townsfolk. All 32x64.

use montana_spec::Pose;

use crate::color::Rgba8;
use crate::layer::Layer;
use crate::shape::{Rect, Shape};

const SKIN: Rgba8 = Rgba8::rgb(220, 180, 140);
const BLACK_HAIR: Rgba8 = Rgba8::rgb(20, 20, 20);
const DENIM: Rgba8 = Rgba8::rgb(50, 100, 200);
const STEEL: Rgba8 = Rgba8::rgb(200, 200, 200);
const IRON: Rgba8 = Rgba8::rgb(100, 100, 100);
const CURLS: Rgba8 = Rgba8::rgb(80, 50, 20);
const SANDAL: Rgba8 = Rgba8::rgb(150, 100, 50);
const GOURD: Rgba8 = Rgba8::rgb(178, 127, 76);
const TORN: Rgba8 = Rgba8::rgb(20, 20, 20);
const BOW_WOOD: Rgba8 = Rgba8::rgb(100, 70, 40);
const ARROW_SHAFT: Rgba8 = Rgba8::rgb(150, 100, 50);

/// Torso and arms block shared by every human.
const TORSO: Layer = Layer::solid(Shape::rect(12, 20, 20, 45), SKIN);

/// Rounded shirt silhouette.
const fn shirt(color: Rgba8) -> Layer {
    Layer::solid(
        Shape::ellipse(Rect::new(10, 22, 20, 35), 16, 28, 15.0, 25.0, 10.0),
        color,
    )
}

const fn sneakers(color: Rgba8) -> Layer {
    Layer::solid(
        Shape::ellipse(Rect::new(8, 24, 55, 60), 16, 57, 20.0, 1.0, 10.0),
        color,
    )
}

const fn backpack(color: Rgba8) -> Layer {
    Layer::solid(Shape::rect(6, 10, 25, 35), color)
}

const fn trousers(color: Rgba8, top: i32, bottom: i32, slope: f64) -> Layer {
    Layer::solid(
        Shape::taper(Rect::new(10, 22, top, bottom), 16, top, 6.0, slope),
        color,
    )
}

const ALAN_BASE: &[Layer] = &[
    TORSO,
    // Medium-length hair
    Layer::solid(Shape::disc(Rect::new(8, 24, 10, 20), 16, 15, 40.0), BLACK_HAIR),
    // Glasses and temples
    Layer::solid(Shape::rect(10, 14, 15, 18), DENIM),
    Layer::solid(Shape::rect(18, 22, 15, 18), DENIM),
    Layer::solid(Shape::rect(9, 10, 16, 20), DENIM),
    Layer::solid(Shape::rect(22, 23, 16, 20), DENIM),
    // Open jacket over a grey tee
    Layer::solid(
        Shape::ellipse(Rect::new(8, 24, 20, 35), 16, 28, 15.0, 40.0, 10.0),
        Rgba8::rgb(30, 30, 30),
    ),
    Layer::solid(Shape::rect(12, 20, 25, 40), Rgba8::rgb(150, 150, 150)),
    trousers(DENIM, 40, 55, 3.0),
    sneakers(Rgba8::rgb(240, 240, 240)),
    backpack(Rgba8::rgb(80, 80, 80)),
];

/// Iron bar: at the hip, raised, lowered.
const ALAN_WEAPON: [Layer; 3] = [
    Layer::solid(Shape::rect(22, 24, 30, 35), IRON),
    Layer::solid(Shape::rect(22, 24, 20, 25), IRON),
    Layer::solid(Shape::rect(22, 24, 35, 40), IRON),
];

const ALEXIS_BASE: &[Layer] = &[
    TORSO,
    // Short hair under a squarish head
    Layer::solid(
        Shape::ellipse(Rect::new(10, 22, 10, 16), 16, 13, 10.0, 1.0, 15.0),
        BLACK_HAIR,
    ),
    Layer::solid(Shape::rect(11, 22, 11, 20), SKIN),
    shirt(Rgba8::rgb(30, 60, 150)),
    // Short sleeves
    Layer::solid(Shape::rect(8, 10, 20, 28), Rgba8::rgb(20, 40, 100)),
    Layer::solid(Shape::rect(22, 24, 20, 28), Rgba8::rgb(20, 40, 100)),
    trousers(Rgba8::rgb(220, 210, 150), 35, 55, 4.0),
    sneakers(Rgba8::rgb(30, 30, 30)),
    backpack(Rgba8::rgb(50, 100, 50)),
];

/// Knife: held, thrown blade, lowered.
const ALEXIS_WEAPON: [Layer; 3] = [
    Layer::solid(Shape::rect(22, 24, 30, 33), STEEL),
    Layer::solid(Shape::rect(24, 28, 25, 30), Rgba8::rgb(150, 150, 150)),
    Layer::solid(Shape::rect(22, 24, 33, 36), STEEL),
];

const JOAQUIN_BASE: &[Layer] = &[
    TORSO,
    Layer::solid(
        Shape::ellipse(Rect::new(8, 24, 8, 16), 16, 12, 10.0, 1.0, 15.0),
        CURLS,
    ),
    Layer::solid(Shape::disc(Rect::new(10, 22, 10, 15), 13, 12, 3.0), CURLS),
    Layer::solid(Shape::disc(Rect::new(10, 22, 10, 15), 19, 12, 3.0), CURLS),
    shirt(Rgba8::rgb(240, 240, 240)),
    // Shorts
    trousers(DENIM, 35, 45, 2.0),
    // Flip-flops and strap
    Layer::solid(Shape::rect(12, 20, 55, 58), SANDAL),
    Layer::solid(Shape::rect(16, 17, 53, 56), SANDAL),
];

/// Mate gourd held at the side, lifted, lowered.
const JOAQUIN_MATE: [Layer; 3] = [
    Layer::solid(Shape::ellipse(Rect::new(4, 10, 30, 34), 7, 32, 9.0, 4.0, 1.0), GOURD),
    Layer::solid(Shape::ellipse(Rect::new(4, 10, 25, 29), 7, 27, 9.0, 4.0, 1.0), GOURD),
    Layer::solid(Shape::ellipse(Rect::new(4, 10, 35, 39), 7, 37, 9.0, 4.0, 1.0), GOURD),
];

const MONSTER_BASE: &[Layer] = &[
    // Muscular dark body
    Layer::solid(
        Shape::ellipse(Rect::new(10, 22, 20, 45), 16, 30, 15.0, 25.0, 10.0),
        Rgba8::rgb(100, 70, 50),
    ),
    // Deer head
    Layer::solid(
        Shape::ellipse(Rect::new(8, 24, 5, 20), 16, 12, 15.0, 10.0, 10.0),
        Rgba8::rgb(120, 80, 50),
    ),
    Layer::solid(Shape::rect(12, 14, 10, 12), Rgba8::BLACK),
    Layer::solid(Shape::rect(18, 20, 10, 12), Rgba8::BLACK),
    // Antlers
    Layer::solid(Shape::disc(Rect::new(14, 18, 0, 10), 16, 5, 5.0), CURLS),
    // Ripped shorts
    trousers(Rgba8::rgb(100, 80, 60), 40, 50, 2.0),
    Layer::solid(Shape::rect(12, 13, 42, 48), TORN),
    Layer::solid(Shape::rect(20, 21, 42, 48), TORN),
];

/// Bow at rest, bow drawn, arrow loosed. Two layers per pose.
const MONSTER_BOW: [[Layer; 2]; 3] = [
    [
        Layer::solid(Shape::rect(6, 8, 25, 35), BOW_WOOD),
        Layer::solid(Shape::rect(7, 8, 25, 35), STEEL),
    ],
    [
        Layer::solid(Shape::rect(4, 6, 25, 35), BOW_WOOD),
        Layer::solid(Shape::rect(5, 6, 25, 35), STEEL),
    ],
    [
        Layer::solid(Shape::rect(20, 28, 28, 32), ARROW_SHAFT),
        Layer::solid(Shape::rect(27, 28, 28, 32), STEEL),
    ],
];

pub(super) const NPC: &[Layer] = &[
    TORSO,
    Layer::solid(
        Shape::ellipse(Rect::new(10, 22, 10, 18), 16, 14, 10.0, 1.0, 15.0),
        Rgba8::rgb(100, 70, 50),
    ),
    // Hat
    Layer::solid(
        Shape::ellipse(Rect::new(8, 24, 5, 10), 16, 7, 15.0, 1.0, 15.0),
        Rgba8::rgb(100, 50, 50),
    ),
    shirt(DENIM),
    trousers(Rgba8::rgb(120, 80, 50), 35, 55, 3.0),
];

/// Raised arm drawn over everything else when the pose is not neutral.
fn arm_overlay(pose: Pose) -> Option<Layer> {
    match pose {
        Pose::Neutral => None,
        Pose::Raised => Some(Layer::solid(Shape::rect(8, 10, 25, 30), SKIN)),
        Pose::Lowered => Some(Layer::solid(Shape::rect(22, 24, 25, 30), SKIN)),
    }
}

fn assemble(base: &[Layer], accessory: &[Layer], pose: Pose) -> Vec<Layer> {
    let mut layers = Vec::with_capacity(base.len() + accessory.len() + 1);
    layers.extend_from_slice(base);
    layers.extend_from_slice(accessory);
    layers.extend(arm_overlay(pose));
    layers
}

pub(super) fn alan(pose: Pose) -> Vec<Layer> {
    assemble(ALAN_BASE, &[ALAN_WEAPON[pose.index() as usize]], pose)
}

pub(super) fn alexis(pose: Pose) -> Vec<Layer> {
    assemble(ALEXIS_BASE, &[ALEXIS_WEAPON[pose.index() as usize]], pose)
}

pub(super) fn joaquin(pose: Pose) -> Vec<Layer> {
    assemble(JOAQUIN_BASE, &[JOAQUIN_MATE[pose.index() as usize]], pose)
}

pub(super) fn monster(pose: Pose) -> Vec<Layer> {
    assemble(MONSTER_BASE, &MONSTER_BOW[pose.index() as usize], pose)
}
