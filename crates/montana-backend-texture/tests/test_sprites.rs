//! Sprite synthesis integration tests.

use montana_backend_texture::png::{write_grid_to_vec_with_hash, PngConfig};
use montana_backend_texture::{encode, PixelGrid, Rgba8, TextureCache, TextureSynthesizer};
use montana_spec::{SpriteCategory, SpriteKind, SpriteSpec};
use pretty_assertions::assert_eq;

const CHARACTERS: [SpriteKind; 5] = [
    SpriteKind::Alan,
    SpriteKind::Alexis,
    SpriteKind::Joaquin,
    SpriteKind::Monster,
    SpriteKind::Npc,
];

#[test]
fn test_characters_are_deterministic_32x64() {
    let synth = TextureSynthesizer::default();
    for kind in CHARACTERS {
        for frame in 0..3 {
            let spec = SpriteSpec::new(kind, frame);
            let first = encode(&synth.synthesize(&spec));
            let second = encode(&synth.synthesize(&spec));

            assert_eq!((first.width, first.height), (32, 64), "{spec}");
            assert_eq!(first.bytes, second.bytes, "{spec} not reproducible");
        }
    }
}

#[test]
fn test_encoded_length_for_every_kind() {
    let synth = TextureSynthesizer::new([360, 640]);
    for kind in SpriteKind::ALL {
        let grid = synth.synthesize(&SpriteSpec::still(kind));
        let data = encode(&grid);
        let (w, h) = grid.dimensions();
        assert_eq!(data.bytes.len(), w as usize * h as usize * 4, "{kind}");
        assert_eq!((data.width, data.height), (w, h));
    }
}

#[test]
fn test_every_sprite_draws_something() {
    let synth = TextureSynthesizer::default();
    for kind in SpriteKind::ALL {
        let grid = synth.synthesize(&SpriteSpec::still(kind));
        assert!(grid.opaque_count() > 0, "{kind} is blank");
    }
}

#[test]
fn test_encoding_is_idempotent() {
    let grid = TextureSynthesizer::default().synthesize(&SpriteSpec::new(SpriteKind::Monster, 2));
    assert_eq!(encode(&grid), encode(&grid));
}

#[test]
fn test_poses_differ_for_animated_kinds() {
    let synth = TextureSynthesizer::default();
    for kind in [SpriteKind::Alan, SpriteKind::Alexis, SpriteKind::Joaquin, SpriteKind::Monster] {
        let poses: Vec<PixelGrid> = (0..3)
            .map(|frame| synth.synthesize(&SpriteSpec::new(kind, frame)))
            .collect();
        assert_ne!(poses[0], poses[1], "{kind}");
        assert_ne!(poses[0], poses[2], "{kind}");
        assert_ne!(poses[1], poses[2], "{kind}");
    }
}

#[test]
fn test_items_leave_corners_transparent() {
    let synth = TextureSynthesizer::default();
    for kind in [
        SpriteKind::PotionHealth,
        SpriteKind::PotionMana,
        SpriteKind::Food,
        SpriteKind::Sword,
        SpriteKind::Wolf,
        SpriteKind::Bear,
    ] {
        let grid = synth.synthesize(&SpriteSpec::still(kind));
        assert_eq!(grid.dimensions(), (32, 32));
        for (x, y) in [(0, 0), (31, 0), (0, 31), (31, 31)] {
            assert_eq!(grid.get(x, y), Some(Rgba8::TRANSPARENT), "{kind} ({x},{y})");
        }
    }
}

#[test]
fn test_wolf_has_red_eyes() {
    let grid = TextureSynthesizer::default().synthesize(&SpriteSpec::still(SpriteKind::Wolf));
    assert_eq!(grid.get(8, 8), Some(Rgba8::rgb(200, 50, 50)));
    assert_eq!(grid.get(12, 8), Some(Rgba8::rgb(200, 50, 50)));
}

#[test]
fn test_static_background_bands() {
    let grid = TextureSynthesizer::new([800, 600])
        .synthesize(&SpriteSpec::still(SpriteKind::BackgroundStatic));
    // Sky at the top, grass along the bottom.
    assert_eq!(grid.get(400, 0), Some(Rgba8::rgb(135, 206, 235)));
    assert_eq!(grid.get(400, 599), Some(Rgba8::rgb(50, 100, 50)));
    // Near peak centred on x = 400 rises 360 rows above the bottom edge.
    assert_eq!(grid.get(400, 300), Some(Rgba8::rgb(100, 100, 100)));
    assert_eq!(grid.get(400, 239), Some(Rgba8::rgb(135, 206, 235)));
}

#[test]
fn test_fog_is_translucent_everywhere() {
    let grid = TextureSynthesizer::new([64, 48])
        .synthesize(&SpriteSpec::still(SpriteKind::BackgroundFog));
    assert!(grid
        .pixels()
        .iter()
        .all(|p| (50..=120).contains(&p.a) && p.r == 200));
}

#[test]
fn test_flip_mirrors_character() {
    let grid = TextureSynthesizer::default().synthesize(&SpriteSpec::new(SpriteKind::Alan, 0));
    let flipped = grid.flip_horizontal();
    for y in 0..64 {
        for x in 0..32 {
            assert_eq!(flipped.get(31 - x, y), grid.get(x, y));
        }
    }
}

#[test]
fn test_named_lookup_matches_typed() {
    let synth = TextureSynthesizer::default();
    assert_eq!(
        synth.synthesize_named(SpriteCategory::Item, "sword", 0),
        synth.synthesize(&SpriteSpec::still(SpriteKind::Sword))
    );
}

#[test]
fn test_cache_and_png_agree() {
    let cache = TextureCache::default();
    let spec = SpriteSpec::new(SpriteKind::Alexis, 1);
    let texture = cache.get(&spec);

    let grid = texture.to_grid();
    let (_, hash_a) = write_grid_to_vec_with_hash(&grid, &PngConfig::default()).unwrap();
    let fresh = cache.synthesizer().synthesize(&spec);
    let (_, hash_b) = write_grid_to_vec_with_hash(&fresh, &PngConfig::default()).unwrap();
    assert_eq!(hash_a, hash_b);
}
