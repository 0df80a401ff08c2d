//! Playable clips: normalized samples wrapped in a WAV container.

use crate::buffer::SampleBuffer;
use crate::error::AudioResult;
use crate::normalize::normalize;
use crate::wav::{pcm_hash, write_wav_to_vec, WavFormat};

/// An encoded sound, ready for the host's audio device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    /// Complete WAV file bytes.
    pub wav: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl AudioClip {
    /// Normalizes a raw buffer to full scale and encodes it.
    pub fn from_raw(raw: SampleBuffer) -> AudioResult<Self> {
        Self::from_normalized(&normalize(raw))
    }

    /// Encodes a buffer as-is. Cue tones use this to keep their half-scale level.
    pub fn from_normalized(buffer: &SampleBuffer) -> AudioResult<Self> {
        let pcm = buffer.to_pcm16();
        let wav = write_wav_to_vec(&WavFormat::mono(buffer.sample_rate()), &pcm)?;
        Ok(Self {
            wav,
            pcm_hash: pcm_hash(&pcm),
            sample_rate: buffer.sample_rate(),
            num_samples: buffer.len(),
        })
    }

    /// Length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_samples as f64 / self.sample_rate as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wav::{compute_pcm_hash, HEADER_LEN};

    #[test]
    fn test_from_raw_normalizes() {
        let clip = AudioClip::from_raw(SampleBuffer::from_samples(vec![0, 10, -20], 100)).unwrap();
        let pcm = &clip.wav[HEADER_LEN..];
        assert_eq!(i16::from_le_bytes([pcm[4], pcm[5]]), -32767);
        assert_eq!(clip.num_samples, 3);
        assert_eq!(compute_pcm_hash(&clip.wav), Some(clip.pcm_hash.clone()));
    }

    #[test]
    fn test_from_normalized_keeps_level() {
        let clip = AudioClip::from_normalized(&SampleBuffer::from_samples(vec![5, -5], 8000)).unwrap();
        assert_eq!(&clip.wav[HEADER_LEN..], &[5, 0, 0xfb, 0xff]);
        assert_eq!(clip.duration_seconds(), 2.0 / 8000.0);
    }
}
