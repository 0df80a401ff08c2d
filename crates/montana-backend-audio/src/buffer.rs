//! Integer sample buffers.

/// A mono buffer of integer samples at a fixed rate.
///
/// Samples are `i32` so additive synthesis can exceed the 16-bit range before
/// normalization brings it back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SampleBuffer {
    samples: Vec<i32>,
    sample_rate: u32,
}

impl SampleBuffer {
    /// Creates a silent buffer of `len` samples.
    pub fn silent(len: usize, sample_rate: u32) -> Self {
        Self {
            samples: vec![0; len],
            sample_rate,
        }
    }

    /// Wraps existing samples.
    pub fn from_samples(samples: Vec<i32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The samples.
    pub fn samples(&self) -> &[i32] {
        &self.samples
    }

    /// Mutable access to the samples.
    pub fn samples_mut(&mut self) -> &mut [i32] {
        &mut self.samples
    }

    /// Consumes the buffer, returning its samples.
    pub fn into_samples(self) -> Vec<i32> {
        self.samples
    }

    /// Adds `value` at `index`; writes past the end are dropped.
    pub fn add(&mut self, index: usize, value: i32) {
        if let Some(sample) = self.samples.get_mut(index) {
            *sample = sample.saturating_add(value);
        }
    }

    /// Largest absolute sample value, or 0 for an empty buffer.
    pub fn peak(&self) -> u32 {
        self.samples
            .iter()
            .map(|s| s.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// Whether every sample is zero.
    pub fn is_silent(&self) -> bool {
        self.peak() == 0
    }

    /// Length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Little-endian 16-bit PCM bytes, clamping anything outside `i16`.
    pub fn to_pcm16(&self) -> Vec<u8> {
        let mut pcm = Vec::with_capacity(self.samples.len() * 2);
        for &sample in &self.samples {
            let value = sample.clamp(i16::MIN as i32, i16::MAX as i32) as i16;
            pcm.extend_from_slice(&value.to_le_bytes());
        }
        pcm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_drops_out_of_range() {
        let mut buf = SampleBuffer::silent(3, 10);
        buf.add(1, 5);
        buf.add(1, -2);
        buf.add(3, 100);
        assert_eq!(buf.samples(), &[0, 3, 0]);
    }

    #[test]
    fn test_peak_uses_magnitude() {
        let buf = SampleBuffer::from_samples(vec![3, -70000, 12], 44100);
        assert_eq!(buf.peak(), 70000);
        assert!(!buf.is_silent());
        assert_eq!(SampleBuffer::default().peak(), 0);
    }

    #[test]
    fn test_pcm16_is_little_endian_and_clamped() {
        let buf = SampleBuffer::from_samples(vec![1, -1, 40000, -40000], 8000);
        assert_eq!(
            buf.to_pcm16(),
            vec![0x01, 0x00, 0xff, 0xff, 0xff, 0x7f, 0x00, 0x80]
        );
    }

    #[test]
    fn test_duration() {
        assert_eq!(SampleBuffer::silent(22050, 44100).duration_seconds(), 0.5);
        assert_eq!(SampleBuffer::silent(10, 0).duration_seconds(), 0.0);
    }
}
