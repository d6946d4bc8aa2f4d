//! End-to-End PCM Wrapping Tests for wavjoin
//!
//! Tests verify:
//! - Header fields synthesized for raw PCM payloads
//! - Round trip through the decoder
//! - Byte-identical re-encoding of decoded buffers
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wavjoin-tests --test e2e_pcm2wav
//! ```

use pretty_assertions::assert_eq;
use wavjoin_core::{build_header, codec, pcm_to_wav, FormatDescriptor};
use wavjoin_tests::fixtures::{hound_read_i32, ramp_i16, widen};
use wavjoin_tests::{samples_to_le_bytes, validate_wav};

#[test]
fn test_one_second_of_speech() {
    let pcm = vec![0u8; 32000];
    let wav = pcm_to_wav(&pcm, 16000, 1, 16);

    assert_eq!(wav.len(), 32044);
    assert_eq!(u32::from_le_bytes(wav[4..8].try_into().unwrap()), 32036);
    assert_eq!(u32::from_le_bytes(wav[28..32].try_into().unwrap()), 32000);
    assert_eq!(u16::from_le_bytes(wav[32..34].try_into().unwrap()), 2);

    let info = validate_wav(&wav).unwrap();
    assert_eq!(info.sample_rate, 16000);
    assert_eq!(info.channels, 1);
    assert_eq!(info.bits_per_sample, 16);
    assert_eq!(info.data_size, 32000);
}

#[test]
fn test_roundtrip_recovers_payload_and_format() {
    let cases: [(u32, u16, u16); 5] = [
        (8000, 1, 8),
        (16000, 1, 16),
        (22050, 2, 16),
        (44100, 2, 24),
        (48000, 6, 32),
    ];
    for (rate, channels, bits) in cases {
        let frame = usize::from(channels) * usize::from(bits) / 8;
        let pcm: Vec<u8> = (0..frame * 25).map(|i| (i * 7 % 251) as u8).collect();

        let wav = pcm_to_wav(&pcm, rate, channels, bits);
        let buffer = codec::decode(&wav).unwrap();

        assert_eq!(buffer.format, FormatDescriptor::new(rate, channels, bits));
        assert_eq!(buffer.samples, pcm);
    }
}

#[test]
fn test_roundtrip_unaligned_payload() {
    // A truncated stream chunk still round-trips byte for byte.
    let pcm = vec![1u8, 2, 3];
    let buffer = codec::decode(&pcm_to_wav(&pcm, 16000, 1, 16)).unwrap();
    assert_eq!(buffer.samples, pcm);
    assert!(!buffer.is_frame_aligned());
}

#[test]
fn test_reencode_is_idempotent() {
    let pcm = samples_to_le_bytes(&ramp_i16(200, 2, 3));
    let wav = pcm_to_wav(&pcm, 44100, 2, 16);

    let once = codec::encode(&codec::decode(&wav).unwrap()).unwrap();
    let twice = codec::encode(&codec::decode(&once).unwrap()).unwrap();
    assert_eq!(once, wav);
    assert_eq!(twice, wav);
}

#[test]
fn test_header_matches_encoder_for_any_format() {
    for (rate, channels, bits) in [(11025, 1, 8), (32000, 2, 16), (192000, 8, 32)] {
        let header = build_header(1234, rate, channels, bits);
        let encoded =
            codec::write_wav_to_vec(&FormatDescriptor::new(rate, channels, bits), &[0; 1234])
                .unwrap();
        assert_eq!(&encoded[..44], &header[..]);
    }
}

#[test]
fn test_hound_reads_wrapped_pcm() {
    let samples = ramp_i16(500, 1, -1234);
    let wav = pcm_to_wav(&samples_to_le_bytes(&samples), 24000, 1, 16);

    let (spec, read) = hound_read_i32(&wav);
    assert_eq!(spec.sample_rate, 24000);
    assert_eq!(spec.channels, 1);
    assert_eq!(read, widen(&samples));
}
