//! Deterministic WAV container writer.
//!
//! Writes the canonical 44-byte header for mono 16-bit PCM with no
//! timestamps or optional chunks, so equal samples give equal files.

use std::io::Write;

use crate::buffer::SampleBuffer;
use crate::error::{AudioError, AudioResult};

/// Size of the canonical header in bytes.
pub const HEADER_LEN: usize = 44;

/// Longest mono 16-bit clip whose RIFF size field still fits in 32 bits.
pub const MAX_SAMPLES: usize = (u32::MAX as usize - 36) / 2;

/// Rejects clips longer than [`MAX_SAMPLES`] before any buffer is allocated.
pub fn check_length(num_samples: usize) -> AudioResult<()> {
    if num_samples > MAX_SAMPLES {
        return Err(AudioError::ClipTooLong {
            samples: num_samples,
        });
    }
    Ok(())
}

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Mono 16-bit PCM.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per sample frame.
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Bytes per second.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

/// Builds the 44-byte header for `data_len` bytes of PCM.
pub fn wav_header(format: &WavFormat, data_len: u32) -> [u8; HEADER_LEN] {
    let mut header = [0u8; HEADER_LEN];
    let fields: [&[u8]; 13] = [
        b"RIFF",
        &data_len.saturating_add(36).to_le_bytes(),
        b"WAVE",
        b"fmt ",
        &16u32.to_le_bytes(),
        &1u16.to_le_bytes(),
        &format.channels.to_le_bytes(),
        &format.sample_rate.to_le_bytes(),
        &format.byte_rate().to_le_bytes(),
        &format.block_align().to_le_bytes(),
        &format.bits_per_sample.to_le_bytes(),
        b"data",
        &data_len.to_le_bytes(),
    ];

    let mut pos = 0;
    for field in fields {
        header[pos..pos + field.len()].copy_from_slice(field);
        pos += field.len();
    }
    header
}

fn data_len(pcm_data: &[u8], format: &WavFormat) -> AudioResult<u32> {
    // RIFF size is 36 + data, which must also fit in 32 bits.
    u32::try_from(pcm_data.len())
        .ok()
        .filter(|len| len.checked_add(36).is_some())
        .ok_or_else(|| AudioError::ClipTooLong {
            samples: pcm_data.len() / format.block_align().max(1) as usize,
        })
}

/// Writes a complete WAV file to a writer.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> AudioResult<()> {
    let header = wav_header(format, data_len(pcm_data, format)?);
    writer.write_all(&header)?;
    writer.write_all(pcm_data)?;
    Ok(())
}

/// Writes a WAV file into a new byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> AudioResult<Vec<u8>> {
    let header = wav_header(format, data_len(pcm_data, format)?);
    let mut buffer = Vec::with_capacity(HEADER_LEN + pcm_data.len());
    buffer.extend_from_slice(&header);
    buffer.extend_from_slice(pcm_data);
    Ok(buffer)
}

/// Encodes a mono buffer as a WAV file at the buffer's sample rate.
///
/// Samples outside the 16-bit range are clamped; normalize first to avoid it.
pub fn encode_wav(buffer: &SampleBuffer) -> AudioResult<Vec<u8>> {
    write_wav_to_vec(&WavFormat::mono(buffer.sample_rate()), &buffer.to_pcm16())
}

/// Extracts the PCM payload from a WAV file.
///
/// Walks the chunk list, so files with extra chunks before `data` are
/// accepted. Returns `None` if the bytes are not a RIFF/WAVE file or the data
/// chunk is truncated.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < HEADER_LEN {
        return None;
    }
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        if chunk_id == b"data" {
            let start = pos + 8;
            return wav_data.get(start..start.checked_add(chunk_size)?);
        }

        pos += 8 + chunk_size + (chunk_size & 1);
    }

    None
}

/// BLAKE3 hash of raw PCM bytes.
pub fn pcm_hash(pcm_data: &[u8]) -> String {
    blake3::hash(pcm_data).to_hex().to_string()
}

/// BLAKE3 hash of the PCM payload of a WAV file.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(pcm_hash)
}
