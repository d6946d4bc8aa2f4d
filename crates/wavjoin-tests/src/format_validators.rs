//! Independent WAV header validator.
//!
//! Parses RIFF/WAVE headers without using `wavjoin-core`, so the tests do not
//! check the codec against itself.

use std::fmt;

/// Error type for format validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    /// Description of what went wrong.
    pub message: String,
    /// Byte offset where the error occurred, if applicable.
    pub offset: Option<usize>,
}

impl FormatError {
    /// Create a new format error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            offset: None,
        }
    }

    /// Create a format error with a byte offset.
    pub fn at_offset(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset: Some(offset),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(offset) = self.offset {
            write!(f, "WAV error at offset {}: {}", offset, self.message)
        } else {
            write!(f, "WAV error: {}", self.message)
        }
    }
}

impl std::error::Error for FormatError {}

/// Information extracted from a WAV file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavInfo {
    /// RIFF chunk size field (file size - 8 for a well-formed file).
    pub riff_size: u32,
    /// Size of the `fmt ` chunk body.
    pub fmt_size: u32,
    /// Audio format code (1 = PCM).
    pub audio_format: u16,
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Byte rate field.
    pub byte_rate: u32,
    /// Block alignment field.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Byte offset of the data payload.
    pub data_offset: usize,
    /// Size field of the `data` chunk.
    pub data_size: u32,
}

impl WavInfo {
    /// Returns the data payload of `data` described by this header.
    pub fn payload<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        let end = (self.data_offset + self.data_size as usize).min(data.len());
        &data[self.data_offset..end]
    }
}

/// Validate WAV file format and extract header information.
///
/// Parses the RIFF/WAVE header structure and validates:
/// - RIFF chunk identifier
/// - WAVE format identifier
/// - fmt sub-chunk with audio parameters
/// - data sub-chunk presence after fmt
///
/// # Arguments
/// * `data` - Raw bytes of the WAV file
///
/// # Returns
/// * `Ok(WavInfo)` - Successfully parsed WAV file information
/// * `Err(FormatError)` - Invalid or corrupted WAV file
pub fn validate_wav(data: &[u8]) -> Result<WavInfo, FormatError> {
    const MIN_HEADER_SIZE: usize = 44;

    if data.len() < MIN_HEADER_SIZE {
        return Err(FormatError::new(format!(
            "File too short: {} bytes (minimum {} required)",
            data.len(),
            MIN_HEADER_SIZE
        )));
    }

    if &data[0..4] != b"RIFF" {
        return Err(FormatError::at_offset(
            format!("Invalid RIFF header: expected 'RIFF', got {:?}", &data[0..4]),
            0,
        ));
    }

    if &data[8..12] != b"WAVE" {
        return Err(FormatError::at_offset(
            format!("Invalid WAVE format: expected 'WAVE', got {:?}", &data[8..12]),
            8,
        ));
    }

    let riff_size = read_u32(data, 4);
    let mut offset = 12;
    let mut fmt: Option<(u32, [u8; 16])> = None;

    while offset + 8 <= data.len() {
        let chunk_id = &data[offset..offset + 4];
        let chunk_size = read_u32(data, offset + 4);

        if chunk_id == b"fmt " {
            if chunk_size < 16 || offset + 8 + 16 > data.len() {
                return Err(FormatError::at_offset("Truncated fmt chunk", offset));
            }
            let mut body = [0u8; 16];
            body.copy_from_slice(&data[offset + 8..offset + 24]);
            fmt = Some((chunk_size, body));
        }

        if chunk_id == b"data" {
            let Some((fmt_size, body)) = fmt else {
                return Err(FormatError::at_offset(
                    "data chunk found before fmt chunk",
                    offset,
                ));
            };

            return Ok(WavInfo {
                riff_size,
                fmt_size,
                audio_format: read_u16(&body, 0),
                channels: read_u16(&body, 2),
                sample_rate: read_u32(&body, 4),
                byte_rate: read_u32(&body, 8),
                block_align: read_u16(&body, 12),
                bits_per_sample: read_u16(&body, 14),
                data_offset: offset + 8,
                data_size: chunk_size,
            });
        }

        // Move to next chunk (chunks are word-aligned)
        let padded_size = (chunk_size as usize + 1) & !1;
        offset += 8 + padded_size;
    }

    if fmt.is_none() {
        return Err(FormatError::new("Missing fmt chunk"));
    }

    Err(FormatError::new("Missing data chunk"))
}

fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}
