//! Sound effect generators.
//!
//! Every effect is built from sine partials into an `i32` buffer, so the raw
//! output may exceed the 16-bit range until it is normalized. The ambient beds
//! truncate each partial toward zero before adding it. Footstep and roar write
//! each sample once, truncating the summed value.

mod ambient;
mod impact;

use std::f64::consts::PI;

use montana_spec::{SoundName, SoundSpec};
use rand::Rng;
use tracing::debug;

use crate::buffer::SampleBuffer;

pub use ambient::{ambient_low, ambient_tension};
pub use impact::{footstep, roar};

/// Synthesizes the raw, un-normalized buffer for `spec`.
///
/// The ambient effects draw from `rng`; footstep and roar ignore it. A zero
/// rate or a non-positive duration yields an empty buffer.
pub fn synthesize<R: Rng + ?Sized>(spec: &SoundSpec, rng: &mut R) -> SampleBuffer {
    let len = spec.num_samples();
    let rate = spec.sample_rate;
    let buffer = match spec.name {
        SoundName::AmbientLow => ambient_low(len, rate, rng),
        SoundName::AmbientTension => ambient_tension(len, rate, rng),
        SoundName::Footstep => footstep(len, rate),
        SoundName::Roar => roar(len, rate),
    };

    debug!(
        sound = %spec.name,
        sample_rate = rate,
        samples = buffer.len(),
        peak = buffer.peak(),
        "synthesized sound"
    );
    buffer
}

/// Phase in radians of `frequency` at sample `index`.
pub(crate) fn phase(frequency: f64, index: usize, sample_rate: u32) -> f64 {
    2.0 * PI * frequency * index as f64 / sample_rate as f64
}

/// One sine partial at sample `index`, truncated toward zero.
pub(crate) fn partial(amplitude: f64, frequency: f64, index: usize, sample_rate: u32) -> i32 {
    (amplitude * phase(frequency, index, sample_rate).sin()) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_partial_truncates_toward_zero() {
        // Quarter period: sin = 1.
        assert_eq!(partial(500.0, 1.0, 1, 4), 500);
        // sin(5π/4) ≈ -0.7071, 10 * that truncates to -7.
        assert_eq!(partial(10.0, 5.0, 1, 8), -7);
        assert_eq!(partial(1000.0, 440.0, 0, 44100), 0);
    }

    #[test]
    fn test_lengths_follow_duration() {
        let mut rng = create_rng(0);
        for name in SoundName::ALL {
            let spec = SoundSpec::new(name);
            let buf = synthesize(&spec, &mut rng);
            assert_eq!(buf.len(), spec.num_samples(), "{name}");
            assert_eq!(buf.sample_rate(), 44100);
        }
    }

    #[test]
    fn test_degenerate_requests_are_empty() {
        let mut rng = create_rng(0);
        for name in SoundName::ALL {
            let zero_rate = SoundSpec::new(name).with_sample_rate(0);
            assert!(synthesize(&zero_rate, &mut rng).is_empty());

            let negative = SoundSpec::new(name).with_duration(-1.0);
            assert!(synthesize(&negative, &mut rng).is_empty());

            let nan = SoundSpec::new(name).with_duration(f64::NAN);
            assert!(synthesize(&nan, &mut rng).is_empty());
        }
    }
}
