//! Sound request types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Canonical sample rate for every synthesized sound, in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Every synthesized sound effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundName {
    /// Calm town ambience: low drone, bell, bird chirps.
    AmbientLow,
    /// Mountain suspense: deep drone, wind, stream, leaves.
    AmbientTension,
    /// A single step on dirt.
    Footstep,
    /// The hunter's roar.
    Roar,
}

impl SoundName {
    /// All sound names in declaration order.
    pub const ALL: [SoundName; 4] = [
        SoundName::AmbientLow,
        SoundName::AmbientTension,
        SoundName::Footstep,
        SoundName::Roar,
    ];

    /// Returns the canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundName::AmbientLow => "ambient_low",
            SoundName::AmbientTension => "ambient_tension",
            SoundName::Footstep => "footstep",
            SoundName::Roar => "roar",
        }
    }

    /// Default clip length in seconds.
    pub fn default_duration(&self) -> f64 {
        match self {
            SoundName::AmbientLow | SoundName::AmbientTension => 2.0,
            SoundName::Footstep => 0.3,
            SoundName::Roar => 1.0,
        }
    }

    /// Whether synthesis consumes the random generator.
    pub fn is_stochastic(&self) -> bool {
        matches!(self, SoundName::AmbientLow | SoundName::AmbientTension)
    }
}

impl fmt::Display for SoundName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SoundName {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SoundName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| SpecError::UnknownSound(s.to_string()))
    }
}

/// Number of samples for a duration at a rate.
///
/// Zero rate and zero, negative or non-finite durations give an empty buffer.
pub fn sample_count(duration_seconds: f64, sample_rate: u32) -> usize {
    if sample_rate == 0 || !duration_seconds.is_finite() || duration_seconds <= 0.0 {
        return 0;
    }
    (duration_seconds * sample_rate as f64) as usize
}

/// A sound request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoundSpec {
    /// Which effect to synthesize.
    pub name: SoundName,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Clip length in seconds.
    pub duration_seconds: f64,
}

impl SoundSpec {
    /// Creates a request with the effect's default duration at the canonical rate.
    pub fn new(name: SoundName) -> Self {
        Self {
            name,
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration_seconds: name.default_duration(),
        }
    }

    /// Overrides the sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Overrides the duration.
    pub fn with_duration(mut self, duration_seconds: f64) -> Self {
        self.duration_seconds = duration_seconds;
        self
    }

    /// Number of samples the synthesized buffer holds.
    pub fn num_samples(&self) -> usize {
        sample_count(self.duration_seconds, self.sample_rate)
    }

    /// Hashable identity of the request (duration compared bitwise).
    pub fn cache_key(&self) -> (SoundName, u32, u64) {
        (self.name, self.sample_rate, self.duration_seconds.to_bits())
    }
}

/// Basic cue waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// Pure sine.
    Sine,
    /// Uniform white noise.
    Noise,
}

/// Short UI feedback cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CueTone {
    /// Quick step blip.
    Step,
    /// Pickup / success chime.
    Joy,
    /// Hunter scream burst.
    Scream,
    /// Memory puzzle beep.
    Puzzle,
    /// Combat hit burst.
    Combat,
}

impl CueTone {
    /// All cue tones in declaration order.
    pub const ALL: [CueTone; 5] = [
        CueTone::Step,
        CueTone::Joy,
        CueTone::Scream,
        CueTone::Puzzle,
        CueTone::Combat,
    ];

    /// Returns the canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CueTone::Step => "step",
            CueTone::Joy => "joy",
            CueTone::Scream => "scream",
            CueTone::Puzzle => "puzzle",
            CueTone::Combat => "combat",
        }
    }

    /// Returns the preset tone parameters.
    pub fn spec(&self) -> ToneSpec {
        match self {
            CueTone::Step => ToneSpec::new(400.0, 0.1, Waveform::Sine),
            CueTone::Joy => ToneSpec::new(800.0, 0.2, Waveform::Sine),
            CueTone::Scream => ToneSpec::new(150.0, 0.8, Waveform::Noise),
            CueTone::Puzzle => ToneSpec::new(600.0, 0.15, Waveform::Sine),
            CueTone::Combat => ToneSpec::new(200.0, 0.4, Waveform::Noise),
        }
    }
}

impl fmt::Display for CueTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CueTone {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CueTone::ALL
            .iter()
            .copied()
            .find(|cue| cue.as_str() == s)
            .ok_or_else(|| SpecError::UnknownCueTone(s.to_string()))
    }
}

/// Parameters of a single cue tone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneSpec {
    /// Frequency in Hz (unused by noise).
    pub frequency: f64,
    /// Length in seconds.
    pub duration_seconds: f64,
    /// Waveform shape.
    pub waveform: Waveform,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl ToneSpec {
    /// Creates a tone at the canonical sample rate.
    pub fn new(frequency: f64, duration_seconds: f64, waveform: Waveform) -> Self {
        Self {
            frequency,
            duration_seconds,
            waveform,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }

    /// Number of samples the tone holds.
    pub fn num_samples(&self) -> usize {
        sample_count(self.duration_seconds, self.sample_rate)
    }
}
