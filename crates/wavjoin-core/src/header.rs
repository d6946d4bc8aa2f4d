//! Canonical WAV header synthesis for headerless PCM.
//!
//! This path never decodes anything: it writes the 44 header bytes directly
//! from the caller's parameters and prepends them to the payload. It is
//! independent of [`crate::codec`] so that raw streamed audio can be wrapped
//! without building a [`crate::PcmBuffer`] first.
//!
//! # Preconditions
//!
//! `sample_rate`, `channels` and `bits_per_sample` must be non-zero. Zero
//! values are a caller error; debug builds assert, release builds write the
//! (meaningless) header anyway.
//!
//! Derived fields use integer division, so a bit depth that is not a multiple
//! of 8 yields truncated `byte_rate`/`block_align` values. All size fields are
//! truncated to their on-disk width, so payloads over 4 GiB produce wrapped
//! sizes.

use byteorder::{ByteOrder, LittleEndian};

/// Size of the synthesized header.
pub const HEADER_LEN: usize = 44;

/// Builds the 44-byte canonical WAV header for a PCM payload.
///
/// # Arguments
/// * `payload_len` - Length of the PCM payload in bytes
/// * `sample_rate` - Sample rate in Hz
/// * `channels` - Number of interleaved channels
/// * `bits_per_sample` - Bit depth of each sample
pub fn build_header(
    payload_len: usize,
    sample_rate: u32,
    channels: u16,
    bits_per_sample: u16,
) -> [u8; HEADER_LEN] {
    debug_assert!(sample_rate > 0, "sample_rate must be positive");
    debug_assert!(channels > 0, "channels must be positive");
    debug_assert!(bits_per_sample > 0, "bits_per_sample must be positive");

    let payload = payload_len as u64;
    let rate = u64::from(sample_rate);
    let ch = u64::from(channels);
    let bits = u64::from(bits_per_sample);

    let chunk_size = (payload + 36) as u32;
    let byte_rate = (rate * ch * bits / 8) as u32;
    let block_align = (ch * bits / 8) as u16;

    let mut header = [0u8; HEADER_LEN];
    header[0..4].copy_from_slice(b"RIFF");
    LittleEndian::write_u32(&mut header[4..8], chunk_size);
    header[8..12].copy_from_slice(b"WAVE");
    header[12..16].copy_from_slice(b"fmt ");
    LittleEndian::write_u32(&mut header[16..20], 16);
    LittleEndian::write_u16(&mut header[20..22], 1);
    LittleEndian::write_u16(&mut header[22..24], channels);
    LittleEndian::write_u32(&mut header[24..28], sample_rate);
    LittleEndian::write_u32(&mut header[28..32], byte_rate);
    LittleEndian::write_u16(&mut header[32..34], block_align);
    LittleEndian::write_u16(&mut header[34..36], bits_per_sample);
    header[36..40].copy_from_slice(b"data");
    LittleEndian::write_u32(&mut header[40..44], payload as u32);
    header
}

/// Wraps headerless PCM bytes in a WAV container.
///
/// The result is exactly `pcm` prefixed with [`build_header`]'s output, so its
/// length is `pcm.len() + 44`.
pub fn pcm_to_wav(pcm: &[u8], sample_rate: u32, channels: u16, bits_per_sample: u16) -> Vec<u8> {
    let mut wav = Vec::with_capacity(HEADER_LEN + pcm.len());
    wav.extend_from_slice(&build_header(pcm.len(), sample_rate, channels, bits_per_sample));
    wav.extend_from_slice(pcm);
    wav
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn u16_at(bytes: &[u8], offset: usize) -> u16 {
        LittleEndian::read_u16(&bytes[offset..offset + 2])
    }

    fn u32_at(bytes: &[u8], offset: usize) -> u32 {
        LittleEndian::read_u32(&bytes[offset..offset + 4])
    }

    #[test]
    fn test_speech_payload_fields() {
        let pcm = vec![0u8; 32000];
        let wav = pcm_to_wav(&pcm, 16000, 1, 16);

        assert_eq!(wav.len(), 32044);
        assert_eq!(u32_at(&wav, 4), 32036);
        assert_eq!(u32_at(&wav, 28), 32000);
        assert_eq!(u16_at(&wav, 32), 2);
        assert_eq!(u32_at(&wav, 40), 32000);
    }

    #[test]
    fn test_header_layout() {
        let header = build_header(1000, 44100, 2, 16);

        assert_eq!(&header[0..4], b"RIFF");
        assert_eq!(u32_at(&header, 4), 1036);
        assert_eq!(&header[8..12], b"WAVE");
        assert_eq!(&header[12..16], b"fmt ");
        assert_eq!(u32_at(&header, 16), 16);
        assert_eq!(u16_at(&header, 20), 1);
        assert_eq!(u16_at(&header, 22), 2);
        assert_eq!(u32_at(&header, 24), 44100);
        assert_eq!(u32_at(&header, 28), 176400);
        assert_eq!(u16_at(&header, 32), 4);
        assert_eq!(u16_at(&header, 34), 16);
        assert_eq!(&header[36..40], b"data");
        assert_eq!(u32_at(&header, 40), 1000);
    }

    #[test]
    fn test_payload_is_appended_verbatim() {
        let pcm: Vec<u8> = (0..=255).collect();
        let wav = pcm_to_wav(&pcm, 8000, 1, 8);
        assert_eq!(&wav[HEADER_LEN..], pcm.as_slice());
    }

    #[test]
    fn test_empty_payload() {
        let wav = pcm_to_wav(&[], 16000, 1, 16);
        assert_eq!(wav.len(), HEADER_LEN);
        assert_eq!(u32_at(&wav, 4), 36);
        assert_eq!(u32_at(&wav, 40), 0);
    }

    #[test]
    fn test_odd_bit_depth_truncates_derived_fields() {
        // 2 * 12 / 8 = 3, 8000 * 2 * 12 / 8 = 24000
        let header = build_header(0, 8000, 2, 12);
        assert_eq!(u16_at(&header, 32), 3);
        assert_eq!(u32_at(&header, 28), 24000);

        // 1 * 12 / 8 = 1 (truncated from 1.5)
        let header = build_header(0, 8000, 1, 12);
        assert_eq!(u16_at(&header, 32), 1);
    }

    #[test]
    fn test_matches_codec_encoder() {
        let pcm = vec![0x11u8; 600];
        let format = crate::FormatDescriptor::new(22050, 2, 24);
        let via_codec = crate::codec::write_wav_to_vec(&format, &pcm).unwrap();
        assert_eq!(pcm_to_wav(&pcm, 22050, 2, 24), via_codec);
    }
}
