//! Test fixture utilities for building WAV inputs.

use std::io::Cursor;

/// Creates a 16-bit integer PCM spec.
pub fn pcm16_spec(sample_rate: u32, channels: u16) -> hound::WavSpec {
    hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Writes interleaved integer samples to an in-memory WAV file with `hound`.
///
/// Samples must fit the spec's bit depth.
pub fn hound_wav(spec: hound::WavSpec, samples: &[i32]) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer =
            hound::WavWriter::new(&mut cursor, spec).expect("Failed to create WAV writer");
        for &sample in samples {
            writer.write_sample(sample).expect("Failed to write sample");
        }
        writer.finalize().expect("Failed to finalize WAV");
    }
    cursor.into_inner()
}

/// Deterministic interleaved 16-bit test signal.
///
/// Each input gets a distinct `seed` so concatenation order is observable.
pub fn ramp_i16(frames: usize, channels: u16, seed: i16) -> Vec<i16> {
    let count = frames * usize::from(channels);
    (0..count)
        .map(|i| seed.wrapping_add((i as i16).wrapping_mul(37)))
        .collect()
}

/// Converts 16-bit samples to their little-endian byte form.
pub fn samples_to_le_bytes(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// Widens 16-bit samples for [`hound_wav`].
pub fn widen(samples: &[i16]) -> Vec<i32> {
    samples.iter().map(|&s| i32::from(s)).collect()
}

/// Reads every sample of a WAV file with `hound`.
pub fn hound_read_i32(bytes: &[u8]) -> (hound::WavSpec, Vec<i32>) {
    let reader = hound::WavReader::new(Cursor::new(bytes)).expect("hound rejected the WAV");
    let spec = reader.spec();
    let samples = reader
        .into_samples::<i32>()
        .collect::<Result<Vec<_>, _>>()
        .expect("Failed to read samples");
    (spec, samples)
}
