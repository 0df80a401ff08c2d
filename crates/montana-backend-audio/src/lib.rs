//! Montana Audio Backend
//!
//! Procedural sound effects for the Montana game: two looping ambient beds, a
//! footstep, a monster roar and a set of short UI cue tones. Nothing is loaded
//! from disk; every clip is computed from a closed-form recipe.
//!
//! # Pipeline
//!
//! 1. [`effect::synthesize`] sums truncated sine partials into an `i32`
//!    [`SampleBuffer`].
//! 2. [`normalize()`] scales the buffer so its peak is exactly 32767.
//! 3. [`wav::encode_wav`] wraps the 16-bit samples in a canonical 44-byte
//!    mono WAV header.
//!
//! [`WaveformSynthesizer::render`] runs all three steps and returns an
//! [`AudioClip`]; [`SoundBank`] memoizes the result.
//!
//! # Example
//!
//! ```
//! use montana_backend_audio::{rng::create_rng, WaveformSynthesizer};
//! use montana_spec::SoundName;
//!
//! let synth = WaveformSynthesizer::default();
//! let spec = synth.spec(SoundName::Footstep);
//! let clip = synth.render(&spec, &mut create_rng(0)).unwrap();
//!
//! assert_eq!(clip.num_samples, 13230);
//! assert_eq!(clip.wav.len(), 44 + 13230 * 2);
//! ```
//!
//! # Determinism
//!
//! Footstep, roar and the sine cues are pure functions of their request. The
//! ambient beds and noise cues draw from an explicitly passed generator; with
//! the PCG32 generators from [`rng`] the output is reproducible per seed.

pub mod buffer;
pub mod cache;
pub mod clip;
pub mod effect;
pub mod error;
pub mod normalize;
pub mod rng;
pub mod synth;
pub mod tone;
pub mod wav;

pub use buffer::SampleBuffer;
pub use cache::SoundBank;
pub use clip::AudioClip;
pub use error::{AudioError, AudioResult};
pub use normalize::normalize;
pub use synth::WaveformSynthesizer;
pub use wav::encode_wav;
