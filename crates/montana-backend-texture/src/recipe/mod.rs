//! Layer recipes for every sprite kind.
//!
//! A recipe is the ordered list of layers that draws one entity. Static parts
//! are `const` tables; pose-dependent accessories are indexed by [`Pose`].
//! Dispatch is an exhaustive `match`, so a new [`SpriteKind`] does not compile
//! until it has a recipe.

mod character;
mod enemy;
mod item;
mod scenery;

use montana_spec::{Pose, SpriteKind};

use crate::layer::Layer;

/// Returns the layers for `kind` in draw order.
///
/// `size` is the raster the layers will be composed onto; only the viewport
/// sized backgrounds depend on it.
pub fn layers(kind: SpriteKind, pose: Pose, size: (u32, u32)) -> Vec<Layer> {
    match kind {
        SpriteKind::Alan => character::alan(pose),
        SpriteKind::Alexis => character::alexis(pose),
        SpriteKind::Joaquin => character::joaquin(pose),
        SpriteKind::Monster => character::monster(pose),
        SpriteKind::Npc => character::NPC.to_vec(),
        SpriteKind::Wolf => enemy::WOLF.to_vec(),
        SpriteKind::Bear => enemy::BEAR.to_vec(),
        SpriteKind::PotionHealth => item::POTION_HEALTH.to_vec(),
        SpriteKind::PotionMana => item::POTION_MANA.to_vec(),
        SpriteKind::Food => item::FOOD.to_vec(),
        SpriteKind::Sword => item::SWORD.to_vec(),
        SpriteKind::BackgroundStatic => scenery::mountain_backdrop(size.0, size.1),
        SpriteKind::BackgroundFog => scenery::fog(),
        SpriteKind::Logo => scenery::LOGO.to_vec(),
    }
}
