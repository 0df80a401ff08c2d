//! Sound synthesis entry points.

use montana_spec::{CueTone, SoundName, SoundSpec, SynthConfig, ToneSpec, DEFAULT_SAMPLE_RATE};
use rand::Rng;

use crate::buffer::SampleBuffer;
use crate::clip::AudioClip;
use crate::effect;
use crate::error::AudioResult;
use crate::wav::check_length;
use crate::tone::synthesize_tone;

/// Renders sound effects and cue tones at a fixed sample rate.
///
/// Randomness is never global: every stochastic call takes the generator it
/// should draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveformSynthesizer {
    sample_rate: u32,
}

impl Default for WaveformSynthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE)
    }
}

impl WaveformSynthesizer {
    /// Creates a synthesizer producing `sample_rate` Hz output.
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    /// Creates a synthesizer from the shared configuration.
    pub fn from_config(config: &SynthConfig) -> Self {
        Self::new(config.sample_rate)
    }

    /// Output sample rate.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// A request for `name` at its default duration and this rate.
    pub fn spec(&self, name: SoundName) -> SoundSpec {
        SoundSpec::new(name).with_sample_rate(self.sample_rate)
    }

    /// The raw, un-normalized buffer for `spec`.
    pub fn synthesize<R: Rng + ?Sized>(&self, spec: &SoundSpec, rng: &mut R) -> SampleBuffer {
        effect::synthesize(spec, rng)
    }

    /// Synthesizes, normalizes and encodes `spec`.
    ///
    /// Requests too long for a WAV container fail with
    /// [`AudioError::ClipTooLong`](crate::AudioError::ClipTooLong) before any
    /// samples are allocated.
    pub fn render<R: Rng + ?Sized>(&self, spec: &SoundSpec, rng: &mut R) -> AudioResult<AudioClip> {
        check_length(spec.num_samples())?;
        AudioClip::from_raw(self.synthesize(spec, rng))
    }

    /// Renders a preset cue at this rate. Cues keep their half-scale level.
    pub fn render_cue<R: Rng + ?Sized>(&self, cue: CueTone, rng: &mut R) -> AudioResult<AudioClip> {
        let spec = ToneSpec {
            sample_rate: self.sample_rate,
            ..cue.spec()
        };
        check_length(spec.num_samples())?;
        AudioClip::from_normalized(&synthesize_tone(&spec, rng))
    }
}
