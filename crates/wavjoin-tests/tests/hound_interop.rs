//! Interoperability Tests against hound
//!
//! Files written by hound must decode with the wavjoin codec, and files
//! written by the wavjoin codec must read back in hound with identical
//! samples.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wavjoin-tests --test hound_interop
//! ```

use pretty_assertions::assert_eq;
use wavjoin_core::{codec, FormatDescriptor};
use wavjoin_tests::fixtures::{hound_read_i32, hound_wav, pcm16_spec, ramp_i16, widen};
use wavjoin_tests::samples_to_le_bytes;

#[test]
fn test_decode_hound_pcm16() {
    let samples = ramp_i16(128, 2, 42);
    let wav = hound_wav(pcm16_spec(48000, 2), &widen(&samples));

    let buffer = codec::decode(&wav).unwrap();
    assert_eq!(buffer.format, FormatDescriptor::stereo(48000));
    assert_eq!(buffer.samples, samples_to_le_bytes(&samples));
    assert_eq!(buffer.frame_count(), 128);
}

#[test]
fn test_decode_hound_8_bit() {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 8000,
        bits_per_sample: 8,
        sample_format: hound::SampleFormat::Int,
    };
    let samples: Vec<i32> = (-64..64).collect();
    let wav = hound_wav(spec, &samples);

    let buffer = codec::decode(&wav).unwrap();
    assert_eq!(buffer.format, FormatDescriptor::new(8000, 1, 8));
    assert_eq!(buffer.len(), 128);

    // Re-encoded bytes read back as the same signed samples.
    let reencoded = codec::encode(&buffer).unwrap();
    let (_, read) = hound_read_i32(&reencoded);
    assert_eq!(read, samples);
}

#[test]
fn test_decode_hound_multichannel_extensible() {
    let spec = hound::WavSpec {
        channels: 4,
        sample_rate: 44100,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let samples = widen(&ramp_i16(32, 4, 9));
    let wav = hound_wav(spec, &samples);

    let buffer = codec::decode(&wav).unwrap();
    assert_eq!(buffer.format, FormatDescriptor::new(44100, 4, 16));

    let (read_spec, read) = hound_read_i32(&codec::encode(&buffer).unwrap());
    assert_eq!(read_spec.channels, 4);
    assert_eq!(read, samples);
}

#[test]
fn test_hound_float_is_rejected() {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 44100,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut cursor = std::io::Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for i in 0..16 {
            writer.write_sample(i as f32 / 16.0).unwrap();
        }
        writer.finalize().unwrap();
    }

    let err = codec::decode(&cursor.into_inner()).unwrap_err();
    assert_eq!(err.kind(), wavjoin_core::ErrorKind::InvalidFormat);
}
