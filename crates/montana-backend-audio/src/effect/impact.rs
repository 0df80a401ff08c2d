//! One-shot effects with decaying envelopes. No randomness.

use super::phase;
use crate::buffer::SampleBuffer;

/// A thud on dirt: pitch falls from 200 Hz toward 50 Hz under a quadratic decay.
pub fn footstep(len: usize, sample_rate: u32) -> SampleBuffer {
    let mut buffer = SampleBuffer::silent(len, sample_rate);
    for (i, sample) in buffer.samples_mut().iter_mut().enumerate() {
        let t = i as f64 / len as f64;
        let frequency = 200.0 - t * 150.0;
        let amplitude = 3000.0 * (1.0 - t).powi(2);
        *sample = (amplitude * phase(frequency, i, sample_rate).sin()) as i32;
    }
    buffer
}

/// A monster roar: a wobbling low fundamental with two harmonics.
pub fn roar(len: usize, sample_rate: u32) -> SampleBuffer {
    let mut buffer = SampleBuffer::silent(len, sample_rate);
    for (i, sample) in buffer.samples_mut().iter_mut().enumerate() {
        let n = i as f64;
        let frequency = 80.0 + 20.0 * (n / 5000.0).sin() + 10.0 * (n / 1000.0).sin();
        let amplitude = 8000.0 * (1.0 - n / len as f64).powf(1.5);

        let fundamental = amplitude * phase(frequency, i, sample_rate).sin();
        let second = 0.3 * amplitude * phase(frequency * 2.0, i, sample_rate).sin();
        let third = 0.1 * amplitude * phase(frequency * 3.0, i, sample_rate).sin();
        *sample = (fundamental + second + third) as i32;
    }
    buffer
}
