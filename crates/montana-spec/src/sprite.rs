//! Sprite request types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Every entity that has a procedural texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpriteKind {
    /// Playable character with glasses, jacket and an iron bar.
    Alan,
    /// Playable character with short hair and a knife.
    Alexis,
    /// Playable character with curly hair and sandals.
    Joaquin,
    /// Deer-headed hunter carrying a bow.
    Monster,
    /// Townsperson with a hat.
    Npc,
    /// Grey wolf enemy.
    Wolf,
    /// Brown bear enemy.
    Bear,
    /// Red health potion.
    PotionHealth,
    /// Blue mana potion.
    PotionMana,
    /// Apple.
    Food,
    /// Short sword.
    Sword,
    /// Sky, mountains and grass backdrop.
    BackgroundStatic,
    /// Semi-transparent fog overlay.
    BackgroundFog,
    /// Title logo.
    Logo,
}

impl SpriteKind {
    /// All sprite kinds in declaration order.
    pub const ALL: [SpriteKind; 14] = [
        SpriteKind::Alan,
        SpriteKind::Alexis,
        SpriteKind::Joaquin,
        SpriteKind::Monster,
        SpriteKind::Npc,
        SpriteKind::Wolf,
        SpriteKind::Bear,
        SpriteKind::PotionHealth,
        SpriteKind::PotionMana,
        SpriteKind::Food,
        SpriteKind::Sword,
        SpriteKind::BackgroundStatic,
        SpriteKind::BackgroundFog,
        SpriteKind::Logo,
    ];

    /// Returns the canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpriteKind::Alan => "alan",
            SpriteKind::Alexis => "alexis",
            SpriteKind::Joaquin => "joaquin",
            SpriteKind::Monster => "monster",
            SpriteKind::Npc => "npc",
            SpriteKind::Wolf => "wolf",
            SpriteKind::Bear => "bear",
            SpriteKind::PotionHealth => "potion_health",
            SpriteKind::PotionMana => "potion_mana",
            SpriteKind::Food => "food",
            SpriteKind::Sword => "sword",
            SpriteKind::BackgroundStatic => "background_static",
            SpriteKind::BackgroundFog => "background_fog",
            SpriteKind::Logo => "logo",
        }
    }

    /// Returns the asset category, which fixes the raster size.
    pub fn category(&self) -> SpriteCategory {
        match self {
            SpriteKind::Alan
            | SpriteKind::Alexis
            | SpriteKind::Joaquin
            | SpriteKind::Monster
            | SpriteKind::Npc => SpriteCategory::Character,
            SpriteKind::Wolf | SpriteKind::Bear => SpriteCategory::Enemy,
            SpriteKind::PotionHealth
            | SpriteKind::PotionMana
            | SpriteKind::Food
            | SpriteKind::Sword => SpriteCategory::Item,
            SpriteKind::BackgroundStatic | SpriteKind::BackgroundFog => {
                SpriteCategory::Background
            }
            SpriteKind::Logo => SpriteCategory::Logo,
        }
    }

    /// Whether the kind has pose-dependent frames.
    pub fn is_animated(&self) -> bool {
        matches!(
            self,
            SpriteKind::Alan | SpriteKind::Alexis | SpriteKind::Joaquin | SpriteKind::Monster
        )
    }

    /// Returns the `(width, height)` of this kind's raster.
    pub fn dimensions(&self, viewport: [u32; 2]) -> (u32, u32) {
        self.category().default_size(viewport)
    }
}

impl fmt::Display for SpriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpriteKind {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpriteKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| SpecError::UnknownSpriteKind(s.to_string()))
    }
}

/// Asset category. Each category has a fixed raster size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpriteCategory {
    /// Characters and NPCs, 32x64.
    Character,
    /// Pickups, 32x32.
    Item,
    /// Animal enemies, 32x32.
    Enemy,
    /// Full-screen layers, viewport sized.
    Background,
    /// Title logo, 250x100.
    Logo,
}

impl SpriteCategory {
    /// All categories in listing order.
    pub const ALL: [SpriteCategory; 5] = [
        SpriteCategory::Character,
        SpriteCategory::Item,
        SpriteCategory::Enemy,
        SpriteCategory::Background,
        SpriteCategory::Logo,
    ];

    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpriteCategory::Character => "character",
            SpriteCategory::Item => "item",
            SpriteCategory::Enemy => "enemy",
            SpriteCategory::Background => "background",
            SpriteCategory::Logo => "logo",
        }
    }

    /// Returns `(width, height)` for the category.
    pub fn default_size(&self, viewport: [u32; 2]) -> (u32, u32) {
        match self {
            SpriteCategory::Character => (32, 64),
            SpriteCategory::Item | SpriteCategory::Enemy => (32, 32),
            SpriteCategory::Background => (viewport[0], viewport[1]),
            SpriteCategory::Logo => (250, 100),
        }
    }
}

impl FromStr for SpriteCategory {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpriteCategory::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| SpecError::UnknownCategory(s.to_string()))
    }
}

/// Weapon/limb pose for animated kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pose {
    /// Weapon held at rest.
    Neutral,
    /// Weapon raised (or bow drawn), left arm up.
    Raised,
    /// Weapon lowered (or arrow loosed), right arm up.
    Lowered,
}

impl Pose {
    /// All poses in frame order.
    pub const ALL: [Pose; 3] = [Pose::Neutral, Pose::Raised, Pose::Lowered];

    /// Maps an animation frame to a pose (`frame mod 3`).
    pub fn from_frame(frame: u32) -> Self {
        Self::ALL[(frame % 3) as usize]
    }

    /// Returns the 0-based pose index.
    pub fn index(&self) -> u32 {
        match self {
            Pose::Neutral => 0,
            Pose::Raised => 1,
            Pose::Lowered => 2,
        }
    }
}

/// A sprite request: entity kind plus animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteSpec {
    /// Entity kind.
    pub kind: SpriteKind,
    /// Animation frame. Ignored by static kinds.
    #[serde(default)]
    pub frame: u32,
}

impl SpriteSpec {
    /// Creates a sprite request.
    pub fn new(kind: SpriteKind, frame: u32) -> Self {
        Self { kind, frame }
    }

    /// Creates a request for frame 0.
    pub fn still(kind: SpriteKind) -> Self {
        Self::new(kind, 0)
    }

    /// Returns the pose used to draw this request. Static kinds are always neutral.
    pub fn pose(&self) -> Pose {
        if self.kind.is_animated() {
            Pose::from_frame(self.frame)
        } else {
            Pose::Neutral
        }
    }

    /// Collapses frames that render identically onto one request.
    ///
    /// Two specs with equal normalized forms produce identical pixels.
    pub fn normalized(&self) -> Self {
        Self::new(self.kind, self.pose().index())
    }
}

impl fmt::Display for SpriteSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.frame)
    }
}

/// Parses `kind` or `kind:frame`.
impl FromStr for SpriteSpec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((kind, frame)) => {
                let frame = frame
                    .parse::<u32>()
                    .map_err(|_| SpecError::InvalidFrame(frame.to_string()))?;
                Ok(Self::new(kind.parse()?, frame))
            }
            None => Ok(Self::still(s.parse()?)),
        }
    }
}
