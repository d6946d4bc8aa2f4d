//! RIFF/WAVE container codec.
//!
//! Decoding accepts any linear PCM WAV (extra chunks are skipped); encoding
//! always produces the canonical layout: `RIFF` header, a 16-byte `fmt `
//! chunk, and a single `data` chunk, 44 header bytes in total.

mod chunk;
mod decode;
mod encode;


pub use decode::decode;
pub use encode::{encode, write_wav, write_wav_to_vec};

/// Length of `RIFF` + size + `WAVE`.
pub(crate) const RIFF_HEADER_LEN: usize = 12;

/// Length of the canonical header written by the encoder.
pub const CANONICAL_HEADER_LEN: usize = 44;

/// `fmt ` chunk body size for plain PCM.
pub(crate) const PCM_FMT_CHUNK_LEN: u32 = 16;

/// WAVE_FORMAT_PCM.
pub(crate) const FORMAT_TAG_PCM: u16 = 1;

/// WAVE_FORMAT_EXTENSIBLE.
pub(crate) const FORMAT_TAG_EXTENSIBLE: u16 = 0xFFFE;

/// Bytes 2..16 of KSDATAFORMAT_SUBTYPE_PCM; bytes 0..2 hold the format tag.
pub(crate) const PCM_SUBFORMAT_GUID_TAIL: [u8; 14] = [
    0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0xAA, 0x00, 0x38, 0x9B, 0x71,
];
