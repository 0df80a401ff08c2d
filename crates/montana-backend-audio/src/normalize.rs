//! Peak normalization to the 16-bit range.

use crate::buffer::SampleBuffer;

/// Full-scale 16-bit amplitude.
pub const FULL_SCALE: i32 = i16::MAX as i32;

/// Scales a buffer so its largest magnitude is exactly [`FULL_SCALE`].
///
/// Each sample becomes `round(sample * 32767 / peak)`. Empty and silent
/// buffers are returned unchanged. A normalized buffer normalizes to itself.
pub fn normalize(buffer: SampleBuffer) -> SampleBuffer {
    let peak = buffer.peak();
    if peak == 0 || peak == FULL_SCALE as u32 {
        return buffer;
    }

    let sample_rate = buffer.sample_rate();
    let samples = buffer
        .into_samples()
        .into_iter()
        .map(|s| (s as f64 * FULL_SCALE as f64 / peak as f64).round() as i32)
        .collect();
    tracing::trace!(peak, "normalized buffer");

    SampleBuffer::from_samples(samples, sample_rate)
}
