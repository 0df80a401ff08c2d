//! Montana Asset Vocabulary
//!
//! This crate defines the closed set of assets the Montana synthesis engine can
//! produce, together with the request types handed to the texture and audio
//! backends.
//!
//! # Overview
//!
//! - **Sprites**: [`SpriteKind`] enumerates every entity with a procedural
//!   texture. A [`SpriteSpec`] pairs a kind with an animation frame.
//! - **Sounds**: [`SoundName`] enumerates every synthesized sound effect. A
//!   [`SoundSpec`] adds the sample rate and duration.
//! - **Cue tones**: [`CueTone`] and [`ToneSpec`] describe short UI feedback beeps.
//! - **Configuration**: [`SynthConfig`] carries the viewport size, canonical
//!   sample rate and base seed.
//!
//! # Example
//!
//! ```
//! use montana_spec::{SoundName, SoundSpec, SpriteKind, SpriteSpec};
//!
//! let sprite: SpriteSpec = "alan:1".parse().unwrap();
//! assert_eq!(sprite.kind, SpriteKind::Alan);
//! assert_eq!(sprite.pose().index(), 1);
//!
//! let sound = SoundSpec::new(SoundName::Footstep);
//! assert_eq!(sound.num_samples(), 13230);
//! ```
//!
//! # Modules
//!
//! - [`config`]: Synthesis configuration loaded from JSON
//! - [`error`]: Error types and the [`BackendError`] reporting trait
//! - [`sound`]: Sound effect and cue tone request types
//! - [`sprite`]: Sprite kinds, categories and animation poses

pub mod config;
pub mod error;
pub mod sound;
pub mod sprite;

// Re-export commonly used types at the crate root
pub use config::{SynthConfig, DEFAULT_VIEWPORT};
pub use error::{BackendError, SpecError, SpecResult};
pub use sound::{CueTone, SoundName, SoundSpec, ToneSpec, Waveform, DEFAULT_SAMPLE_RATE};
pub use sprite::{Pose, SpriteCategory, SpriteKind, SpriteSpec};
