//! Looping ambient beds with random events.

use rand::Rng;
use tracing::trace;

use super::partial;
use crate::buffer::SampleBuffer;

const TOWN_DRONE_HZ: f64 = 87.31;
const TOWN_BELL_HZ: f64 = 440.0;
/// The bell sounds for this many samples at the start of every half second.
const TOWN_BELL_SAMPLES: usize = 100;
const BIRD_CHANCE: f64 = 0.01;
const BIRD_SAMPLES: usize = 100;

const MOUNTAIN_DRONE_HZ: f64 = 55.0;
const STREAM_CHANCE: f64 = 0.05;
const STREAM_SAMPLES: usize = 200;
const RUSTLE_CHANCE: f64 = 0.02;
const RUSTLE_SAMPLES: usize = 50;

/// Adds a fixed-frequency sine burst starting at `start`, clipped to the buffer.
///
/// The burst keeps the global sample index as its phase reference, so it
/// lines up with the bed underneath it.
fn add_burst(
    buffer: &mut SampleBuffer,
    start: usize,
    len: usize,
    amplitude: f64,
    frequency: f64,
) {
    let rate = buffer.sample_rate();
    let end = (start + len).min(buffer.len());
    for index in start..end {
        buffer.add(index, partial(amplitude, frequency, index, rate));
    }
}

/// Calm town bed: a low drone, a periodic bell and scattered bird chirps.
pub fn ambient_low<R: Rng + ?Sized>(len: usize, sample_rate: u32, rng: &mut R) -> SampleBuffer {
    let mut buffer = SampleBuffer::silent(len, sample_rate);
    let bell_period = ((sample_rate as f64 * 0.5) as usize).max(1);
    let mut birds = 0usize;

    for i in 0..len {
        buffer.add(i, partial(500.0, TOWN_DRONE_HZ, i, sample_rate));

        if i % bell_period < TOWN_BELL_SAMPLES {
            buffer.add(i, partial(2000.0, TOWN_BELL_HZ, i, sample_rate));
        }

        if rng.gen::<f64>() < BIRD_CHANCE {
            let frequency = 800.0 + rng.gen_range(0..=400) as f64;
            add_burst(&mut buffer, i, BIRD_SAMPLES, 1000.0, frequency);
            birds += 1;
        }
    }

    trace!(birds, "ambient_low events");
    buffer
}

/// Tense mountain bed: a deep drone, wavering wind, stream gurgles and
/// rustling leaves.
pub fn ambient_tension<R: Rng + ?Sized>(
    len: usize,
    sample_rate: u32,
    rng: &mut R,
) -> SampleBuffer {
    let mut buffer = SampleBuffer::silent(len, sample_rate);
    let mut streams = 0usize;
    let mut rustles = 0usize;

    for i in 0..len {
        buffer.add(i, partial(1000.0, MOUNTAIN_DRONE_HZ, i, sample_rate));

        let wind_hz = 20.0 + 10.0 * (i as f64 / 10000.0).sin();
        buffer.add(i, partial(500.0, wind_hz, i, sample_rate));

        if rng.gen::<f64>() < STREAM_CHANCE {
            let frequency = 1000.0 + rng.gen_range(0..=500) as f64;
            add_burst(&mut buffer, i, STREAM_SAMPLES, 800.0, frequency);
            streams += 1;
        }

        if rng.gen::<f64>() < RUSTLE_CHANCE {
            // Leaves pick a new pitch every sample.
            for index in i..(i + RUSTLE_SAMPLES).min(len) {
                let frequency = 500.0 + rng.gen_range(0..=500) as f64;
                buffer.add(index, partial(300.0, frequency, index, sample_rate));
            }
            rustles += 1;
        }
    }

    trace!(streams, rustles, "ambient_tension events");
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_ambient_low_is_seed_deterministic() {
        let a = ambient_low(4410, 44100, &mut create_rng(5));
        let b = ambient_low(4410, 44100, &mut create_rng(5));
        assert_eq!(a, b);
        assert_ne!(a, ambient_low(4410, 44100, &mut create_rng(6)));
    }

    #[test]
    fn test_ambient_low_without_events_is_drone_plus_bell() {
        // A generator stuck at its maximum never fires an event.
        let mut never = StepRng::new(u64::MAX, 0);
        let buf = ambient_low(22150, 44100, &mut never);

        // Inside the first bell window.
        let expected = partial(500.0, TOWN_DRONE_HZ, 50, 44100)
            + partial(2000.0, TOWN_BELL_HZ, 50, 44100);
        assert_eq!(buf.samples()[50], expected);

        // Between bells only the drone remains.
        assert_eq!(buf.samples()[150], partial(500.0, TOWN_DRONE_HZ, 150, 44100));

        // The bell returns at the half second.
        let expected = partial(500.0, TOWN_DRONE_HZ, 22060, 44100)
            + partial(2000.0, TOWN_BELL_HZ, 22060, 44100);
        assert_eq!(buf.samples()[22060], expected);
    }

    #[test]
    fn test_ambient_tension_without_events_is_drone_plus_wind() {
        let mut never = StepRng::new(u64::MAX, 0);
        let buf = ambient_tension(1000, 44100, &mut never);
        let i = 777;
        let wind_hz = 20.0 + 10.0 * (i as f64 / 10000.0).sin();
        let expected =
            partial(1000.0, MOUNTAIN_DRONE_HZ, i, 44100) + partial(500.0, wind_hz, i, 44100);
        assert_eq!(buf.samples()[i], expected);
    }

    #[test]
    fn test_events_change_the_bed() {
        let mut never = StepRng::new(u64::MAX, 0);
        let quiet = ambient_tension(8820, 44100, &mut never);
        let busy = ambient_tension(8820, 44100, &mut create_rng(1));
        assert_eq!(quiet.len(), busy.len());
        assert_ne!(quiet, busy);
    }

    #[test]
    fn test_burst_is_clipped_at_end() {
        let mut buf = SampleBuffer::silent(10, 8);
        add_burst(&mut buf, 8, 100, 100.0, 2.0);
        // sin(2π·2·8/8) = sin(4π) ≈ 0, sin(2π·2·9/8) = sin(4.5π) = 1.
        assert_eq!(buf.samples()[..8], [0; 8]);
        assert_eq!(buf.samples()[9], 100);
    }
}
