//! WAV container decoding.

use byteorder::{ByteOrder, LittleEndian};
use log::{debug, warn};

use super::chunk::{Chunk, ChunkIter};
use super::{
    FORMAT_TAG_EXTENSIBLE, FORMAT_TAG_PCM, PCM_SUBFORMAT_GUID_TAIL, RIFF_HEADER_LEN,
};
use crate::error::{WavError, WavResult};
use crate::format::FormatDescriptor;
use crate::pcm::PcmBuffer;

/// Minimum `fmt ` body size (PCMWAVEFORMAT).
const FMT_MIN_LEN: usize = 16;

/// `fmt ` body size carrying a WAVE_FORMAT_EXTENSIBLE sub-format GUID.
const FMT_EXTENSIBLE_LEN: usize = 40;

/// Decodes a complete WAV buffer into its format and sample bytes.
///
/// The buffer must start with `RIFF`/`WAVE` and contain a linear PCM `fmt `
/// chunk followed (not necessarily immediately) by a `data` chunk. Unknown
/// chunks are skipped. A `data` chunk that declares more bytes than remain
/// is clamped to what is present.
///
/// # Arguments
/// * `bytes` - Complete WAV file bytes
///
/// # Returns
/// The decoded buffer, or `InvalidFormat`
pub fn decode(bytes: &[u8]) -> WavResult<PcmBuffer> {
    if bytes.len() < RIFF_HEADER_LEN {
        return Err(WavError::invalid(format!(
            "too short: {} bytes (minimum {} required)",
            bytes.len(),
            RIFF_HEADER_LEN
        )));
    }
    if &bytes[0..4] != b"RIFF" {
        return Err(WavError::invalid_at(
            format!("expected 'RIFF' magic, got {:?}", &bytes[0..4]),
            0,
        ));
    }
    if &bytes[8..12] != b"WAVE" {
        return Err(WavError::invalid_at(
            format!("expected 'WAVE' form type, got {:?}", &bytes[8..12]),
            8,
        ));
    }

    let riff_len = (LittleEndian::read_u32(&bytes[4..8]) as usize).saturating_add(8);
    if riff_len != bytes.len() {
        debug!(
            "RIFF size field says {} bytes, buffer holds {}",
            riff_len,
            bytes.len()
        );
    }

    let mut format: Option<FormatDescriptor> = None;

    for chunk in ChunkIter::new(bytes, RIFF_HEADER_LEN) {
        match &chunk.id {
            b"fmt " => {
                if format.is_some() {
                    debug!("ignoring duplicate fmt chunk at offset {}", chunk.offset);
                    continue;
                }
                format = Some(parse_fmt(&chunk)?);
            }
            b"data" => {
                let Some(format) = format else {
                    return Err(WavError::invalid_at(
                        "data chunk found before fmt chunk",
                        chunk.offset,
                    ));
                };
                if chunk.is_truncated() {
                    warn!(
                        "data chunk declares {} bytes but only {} are present; clamping",
                        chunk.declared_size,
                        chunk.body.len()
                    );
                }
                let buffer = PcmBuffer::new(format, chunk.body.to_vec());
                if !buffer.is_frame_aligned() {
                    warn!(
                        "data payload of {} bytes is not a whole number of {}-byte frames",
                        buffer.len(),
                        format.frame_size()
                    );
                }
                debug!(
                    "decoded {} Hz, {} ch, {} bit, {} payload bytes",
                    format.sample_rate,
                    format.channels,
                    format.bits_per_sample,
                    buffer.len()
                );
                return Ok(buffer);
            }
            _ => debug!(
                "skipping '{}' chunk ({} bytes) at offset {}",
                chunk.id_lossy(),
                chunk.declared_size,
                chunk.offset
            ),
        }
    }

    if format.is_none() {
        return Err(WavError::invalid("missing fmt chunk"));
    }
    Err(WavError::invalid("missing data chunk"))
}

/// Parses a `fmt ` chunk, accepting only linear PCM.
fn parse_fmt(chunk: &Chunk<'_>) -> WavResult<FormatDescriptor> {
    let body = chunk.body;
    if body.len() < FMT_MIN_LEN {
        return Err(WavError::invalid_at(
            format!("fmt chunk too small: {} bytes", body.len()),
            chunk.offset,
        ));
    }

    let audio_format = LittleEndian::read_u16(&body[0..2]);
    let format = FormatDescriptor {
        channels: LittleEndian::read_u16(&body[2..4]),
        sample_rate: LittleEndian::read_u32(&body[4..8]),
        bits_per_sample: LittleEndian::read_u16(&body[14..16]),
    };

    match audio_format {
        FORMAT_TAG_PCM => {}
        FORMAT_TAG_EXTENSIBLE if is_pcm_subformat(body) => {}
        FORMAT_TAG_EXTENSIBLE => {
            return Err(WavError::invalid_at(
                "extensible fmt chunk does not describe linear PCM",
                chunk.offset,
            ))
        }
        other => {
            return Err(WavError::invalid_at(
                format!("unsupported audio format code {} (only PCM = 1)", other),
                chunk.offset,
            ))
        }
    }

    if format.channels == 0 {
        return Err(WavError::invalid_at("channel count is zero", chunk.offset));
    }
    if format.sample_rate == 0 {
        return Err(WavError::invalid_at("sample rate is zero", chunk.offset));
    }
    if format.bits_per_sample == 0 {
        return Err(WavError::invalid_at("bits per sample is zero", chunk.offset));
    }

    Ok(format)
}

/// Checks the WAVE_FORMAT_EXTENSIBLE sub-format GUID for KSDATAFORMAT_SUBTYPE_PCM.
fn is_pcm_subformat(body: &[u8]) -> bool {
    if body.len() < FMT_EXTENSIBLE_LEN {
        return false;
    }
    let guid = &body[24..40];
    LittleEndian::read_u16(&guid[0..2]) == FORMAT_TAG_PCM
        && guid[2..16] == PCM_SUBFORMAT_GUID_TAIL
}
