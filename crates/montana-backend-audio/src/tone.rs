//! Short cue tones and the plain sine oscillator.

use montana_spec::{CueTone, ToneSpec, Waveform};
use rand::Rng;
use tracing::debug;

use crate::buffer::SampleBuffer;
use crate::normalize::FULL_SCALE;
use crate::effect::partial;

/// Cue tones play at half of full scale.
const CUE_AMPLITUDE: f64 = 0.5 * FULL_SCALE as f64;

/// A full-scale sine of `frequency` lasting `duration_seconds`.
pub fn sine_wave(frequency: f64, duration_seconds: f64, sample_rate: u32) -> SampleBuffer {
    let len = montana_spec::sound::sample_count(duration_seconds, sample_rate);
    let samples = (0..len)
        .map(|i| partial(FULL_SCALE as f64, frequency, i, sample_rate))
        .collect();
    SampleBuffer::from_samples(samples, sample_rate)
}

/// Renders a tone: a half-scale sine, or half-scale uniform noise drawn from `rng`.
pub fn synthesize_tone<R: Rng + ?Sized>(spec: &ToneSpec, rng: &mut R) -> SampleBuffer {
    let len = spec.num_samples();
    let rate = spec.sample_rate;
    let samples = match spec.waveform {
        Waveform::Sine => (0..len)
            .map(|i| partial(CUE_AMPLITUDE, spec.frequency, i, rate))
            .collect(),
        Waveform::Noise => (0..len)
            .map(|_| (CUE_AMPLITUDE * rng.gen_range(-1.0..1.0)) as i32)
            .collect(),
    };

    debug!(
        frequency = spec.frequency,
        waveform = ?spec.waveform,
        samples = len,
        "synthesized tone"
    );
    SampleBuffer::from_samples(samples, rate)
}

/// Renders one of the preset cues.
pub fn cue<R: Rng + ?Sized>(cue: CueTone, rng: &mut R) -> SampleBuffer {
    synthesize_tone(&cue.spec(), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_sine_wave_full_scale() {
        let buf = sine_wave(1.0, 1.0, 4);
        assert_eq!(buf.samples(), &[0, 32767, 0, -32767]);
    }

    #[test]
    fn test_cue_lengths() {
        let mut rng = create_rng(3);
        let expected = [
            (CueTone::Step, 4410),
            (CueTone::Joy, 8820),
            (CueTone::Scream, 35280),
            (CueTone::Puzzle, 6615),
            (CueTone::Combat, 17640),
        ];
        for (tone, len) in expected {
            let buf = cue(tone, &mut rng);
            assert_eq!(buf.len(), len, "{tone}");
            assert_eq!(buf.sample_rate(), 44100);
        }
    }

    #[test]
    fn test_cues_stay_at_half_scale() {
        let mut rng = create_rng(9);
        for tone in CueTone::ALL {
            let buf = cue(tone, &mut rng);
            assert!(buf.peak() <= 16383, "{tone}");
            assert!(buf.peak() > 10000, "{tone}");
        }
    }

    #[test]
    fn test_sine_cue_ignores_rng_and_noise_uses_it() {
        let step_a = cue(CueTone::Step, &mut create_rng(1));
        let step_b = cue(CueTone::Step, &mut create_rng(2));
        assert_eq!(step_a, step_b);

        let scream_a = cue(CueTone::Scream, &mut create_rng(1));
        let scream_b = cue(CueTone::Scream, &mut create_rng(2));
        assert_ne!(scream_a, scream_b);
    }
}
