//! Framing of raw PCM into a playable WAV container

use std::io::Cursor;

use hound::{SampleFormat, WavSpec, WavWriter};
use tracing::debug;

use crate::error::{Error, Result};

/// Sample rate the provider is asked to synthesize at
pub const SAMPLE_RATE: u32 = 16_000;

/// Mono output
pub const CHANNELS: u16 = 1;

/// Canonical RIFF/WAVE header length for 16-bit integer PCM
pub const WAV_HEADER_LEN: usize = 44;

/// Wrap raw 16-bit little-endian mono PCM in a WAV container.
///
/// The output is always `WAV_HEADER_LEN + pcm.len()` bytes. Input whose
/// length is not a multiple of two is rejected rather than padded or
/// truncated: a dangling byte is not a valid 16-bit sample.
pub fn pcm_to_wav(pcm: &[u8]) -> Result<Vec<u8>> {
    if pcm.len() % 2 != 0 {
        return Err(Error::Audio(format!(
            "PCM length {} is not a whole number of 16-bit samples",
            pcm.len()
        )));
    }

    let spec = WavSpec {
        channels: CHANNELS,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut buffer = Cursor::new(Vec::with_capacity(WAV_HEADER_LEN + pcm.len()));
    {
        let mut writer =
            WavWriter::new(&mut buffer, spec).map_err(|e| Error::Audio(e.to_string()))?;

        for sample in pcm.chunks_exact(2) {
            let value = i16::from_le_bytes([sample[0], sample[1]]);
            writer
                .write_sample(value)
                .map_err(|e| Error::Audio(e.to_string()))?;
        }

        writer
            .finalize()
            .map_err(|e| Error::Audio(e.to_string()))?;
    }

    debug!(
        "Framed {} PCM bytes into WAV ({} bytes)",
        pcm.len(),
        buffer.get_ref().len()
    );
    Ok(buffer.into_inner())
}
