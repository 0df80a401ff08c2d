//! Sprite synthesis entry points.

use montana_spec::{SpriteCategory, SpriteKind, SpriteSpec, SynthConfig, DEFAULT_VIEWPORT};
use tracing::debug;

use crate::grid::PixelGrid;
use crate::layer::compose;
use crate::recipe;

/// Rasterizes sprites from their layer recipes.
///
/// The synthesizer is stateless apart from the viewport, which sizes the
/// background kinds. It is `Copy` and can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureSynthesizer {
    viewport: [u32; 2],
}

impl Default for TextureSynthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT)
    }
}

impl TextureSynthesizer {
    /// Creates a synthesizer for a `[width, height]` viewport.
    pub fn new(viewport: [u32; 2]) -> Self {
        Self { viewport }
    }

    /// Creates a synthesizer from the shared configuration.
    pub fn from_config(config: &SynthConfig) -> Self {
        Self::new(config.viewport)
    }

    /// Viewport used for backgrounds.
    pub fn viewport(&self) -> [u32; 2] {
        self.viewport
    }

    /// Renders one sprite.
    ///
    /// Animated kinds draw pose `frame mod 3`; every other kind ignores the
    /// frame. The result always has the fixed size of the kind's category.
    pub fn synthesize(&self, spec: &SpriteSpec) -> PixelGrid {
        let (width, height) = spec.kind.dimensions(self.viewport);
        let pose = spec.pose();
        let layers = recipe::layers(spec.kind, pose, (width, height));

        let mut grid = PixelGrid::transparent(width, height);
        compose(&mut grid, &layers);

        debug!(
            kind = %spec.kind,
            pose = pose.index(),
            width,
            height,
            layers = layers.len(),
            "synthesized sprite"
        );
        grid
    }

    /// Renders a sprite looked up by name within a category.
    ///
    /// This is the lenient boundary used by hosts that still address assets by
    /// string. A name outside the vocabulary, or one that belongs to a
    /// different category, yields a fully transparent grid of the category's
    /// default size. The hunter is also reachable as an enemy.
    pub fn synthesize_named(&self, category: SpriteCategory, name: &str, frame: u32) -> PixelGrid {
        match name.parse::<SpriteKind>() {
            Ok(kind) if self.serves(category, kind) => {
                self.synthesize(&SpriteSpec::new(kind, frame))
            }
            _ => {
                debug!(?category, name, "unknown sprite name, returning blank grid");
                let (width, height) = category.default_size(self.viewport);
                PixelGrid::transparent(width, height)
            }
        }
    }

    fn serves(&self, category: SpriteCategory, kind: SpriteKind) -> bool {
        kind.category() == category
            || (category == SpriteCategory::Enemy && kind == SpriteKind::Monster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba8;
    use montana_spec::Pose;

    #[test]
    fn test_character_sizes() {
        let synth = TextureSynthesizer::default();
        for kind in [
            SpriteKind::Alan,
            SpriteKind::Alexis,
            SpriteKind::Joaquin,
            SpriteKind::Monster,
            SpriteKind::Npc,
        ] {
            for frame in 0..3 {
                let grid = synth.synthesize(&SpriteSpec::new(kind, frame));
                assert_eq!(grid.dimensions(), (32, 64), "{kind}:{frame}");
            }
        }
    }

    #[test]
    fn test_background_uses_viewport() {
        let synth = TextureSynthesizer::new([120, 90]);
        let grid = synth.synthesize(&SpriteSpec::still(SpriteKind::BackgroundStatic));
        assert_eq!(grid.dimensions(), (120, 90));
        // Backdrop is fully opaque.
        assert_eq!(grid.opaque_count(), 120 * 90);
    }

    #[test]
    fn test_alan_skin_and_weapon_pose() {
        let synth = TextureSynthesizer::default();
        let skin = Rgba8::rgb(220, 180, 140);
        let iron = Rgba8::rgb(100, 100, 100);
        let jacket = Rgba8::rgb(30, 30, 30);

        let neutral = synth.synthesize(&SpriteSpec::new(SpriteKind::Alan, 0));
        assert_eq!(neutral.get(14, 37), Some(Rgba8::rgb(150, 150, 150)));
        assert_eq!(neutral.get(22, 32), Some(iron));
        assert_eq!(neutral.get(22, 22), Some(jacket));
        assert_eq!(neutral.get(8, 27), Some(Rgba8::rgb(80, 80, 80)));

        let raised = synth.synthesize(&SpriteSpec::new(SpriteKind::Alan, 1));
        assert_eq!(raised.get(22, 22), Some(iron));
        assert_eq!(raised.get(22, 32), Some(jacket));
        // Left arm raised.
        assert_eq!(raised.get(8, 27), Some(skin));
    }

    #[test]
    fn test_frame_wraps_to_pose() {
        let synth = TextureSynthesizer::default();
        let a = synth.synthesize(&SpriteSpec::new(SpriteKind::Monster, 4));
        let b = synth.synthesize(&SpriteSpec::new(SpriteKind::Monster, Pose::Raised.index()));
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_name_is_transparent() {
        let synth = TextureSynthesizer::default();
        let grid = synth.synthesize_named(SpriteCategory::Character, "dragon", 0);
        assert_eq!(grid.dimensions(), (32, 64));
        assert!(grid.is_fully_transparent());

        let grid = synth.synthesize_named(SpriteCategory::Item, "alan", 0);
        assert_eq!(grid.dimensions(), (32, 32));
        assert!(grid.is_fully_transparent());

        let grid = synth.synthesize_named(SpriteCategory::Background, "castle", 0);
        assert_eq!(grid.dimensions(), (800, 600));
        assert!(grid.is_fully_transparent());
    }

    #[test]
    fn test_monster_is_reachable_as_enemy() {
        let synth = TextureSynthesizer::default();
        let grid = synth.synthesize_named(SpriteCategory::Enemy, "monster", 2);
        assert_eq!(
            grid,
            synth.synthesize(&SpriteSpec::new(SpriteKind::Monster, 2))
        );
    }

    #[test]
    fn test_logo_is_partially_transparent() {
        let synth = TextureSynthesizer::default();
        let grid = synth.synthesize(&SpriteSpec::still(SpriteKind::Logo));
        assert_eq!(grid.dimensions(), (250, 100));
        assert_eq!(grid.get(0, 0), Some(Rgba8::TRANSPARENT));
        assert_eq!(grid.get(190, 30), Some(Rgba8::rgb(255, 255, 100)));
        assert_eq!(grid.get(130, 99), Some(Rgba8::rgb(100, 100, 100)));
    }
}
