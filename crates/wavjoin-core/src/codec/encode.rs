//! Canonical WAV container encoding.

use std::io::Write;

use super::{CANONICAL_HEADER_LEN, FORMAT_TAG_PCM, PCM_FMT_CHUNK_LEN};
use crate::error::{WavError, WavResult};
use crate::format::FormatDescriptor;
use crate::pcm::PcmBuffer;

/// Largest payload whose RIFF chunk size (`payload + 36`) still fits in a u32.
const MAX_PAYLOAD_LEN: usize = (u32::MAX - 36) as usize;

/// Writes a complete canonical WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Returns
/// `PayloadTooLarge` if the payload cannot be described by the header, or
/// `Io` if the writer fails
pub fn write_wav<W: Write>(
    writer: &mut W,
    format: &FormatDescriptor,
    pcm_data: &[u8],
) -> WavResult<()> {
    if pcm_data.len() > MAX_PAYLOAD_LEN {
        return Err(WavError::PayloadTooLarge {
            len: pcm_data.len(),
        });
    }
    let data_size = pcm_data.len() as u32;
    let riff_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&riff_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&PCM_FMT_CHUNK_LEN.to_le_bytes())?;
    writer.write_all(&FORMAT_TAG_PCM.to_le_bytes())?;
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a new byte vector.
pub fn write_wav_to_vec(format: &FormatDescriptor, pcm_data: &[u8]) -> WavResult<Vec<u8>> {
    let mut buffer = Vec::with_capacity(CANONICAL_HEADER_LEN + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data)?;
    Ok(buffer)
}

/// Encodes a decoded buffer as a canonical 44-byte-header WAV container.
pub fn encode(buffer: &PcmBuffer) -> WavResult<Vec<u8>> {
    write_wav_to_vec(&buffer.format, &buffer.samples)
}
