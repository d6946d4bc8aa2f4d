//! WAV concatenation: decode, validate, merge, encode.

use log::debug;

use crate::codec;
use crate::error::{WavError, WavResult};
use crate::format::FormatDescriptor;
use crate::options::{BitDepthPolicy, ConcatOptions};
use crate::pcm::PcmBuffer;
use crate::validate::check_against;

/// Joins the sample bytes of `buffers` in order.
///
/// No resampling, padding or gap insertion is done. Callers are expected to
/// have validated the formats first.
pub fn merge(buffers: &[PcmBuffer]) -> Vec<u8> {
    let total: usize = buffers.iter().map(PcmBuffer::len).sum();
    let mut samples = Vec::with_capacity(total);
    for buffer in buffers {
        samples.extend_from_slice(&buffer.samples);
    }
    samples
}

/// Concatenates already-decoded buffers into one buffer.
///
/// The output takes its sample rate and channel count from the first buffer.
/// Under [`BitDepthPolicy::LastInput`] the bit depth comes from the last
/// buffer; under [`BitDepthPolicy::Strict`] all bit depths are equal.
pub fn concat_buffers(buffers: &[PcmBuffer], options: &ConcatOptions) -> WavResult<PcmBuffer> {
    let (first, rest) = buffers.split_first().ok_or(WavError::EmptyInput)?;
    for (offset, buffer) in rest.iter().enumerate() {
        check_against(
            &first.format,
            &buffer.format,
            offset + 1,
            options.bit_depth_policy,
        )?;
    }
    let format = output_format(buffers, options.bit_depth_policy);
    Ok(PcmBuffer::new(format, merge(buffers)))
}

/// Concatenates WAV files with default options.
///
/// See [`concat_wav_with`].
pub fn concat_wav<B: AsRef<[u8]>>(inputs: &[B]) -> WavResult<Vec<u8>> {
    concat_wav_with(inputs, &ConcatOptions::default())
}

/// Concatenates WAV files into a single canonical WAV file.
///
/// Inputs are decoded and checked in order; the first failure aborts the
/// whole operation. Decode failures are tagged with the input index.
///
/// # Returns
/// * `EmptyInput` - `inputs` is empty
/// * `InvalidFormat` - an input is not a linear PCM WAV
/// * `FormatMismatch` - an input's sample rate or channel count (or, in strict
///   mode, bit depth) differs from the first input
/// * `Io` - the output could not be written
pub fn concat_wav_with<B: AsRef<[u8]>>(
    inputs: &[B],
    options: &ConcatOptions,
) -> WavResult<Vec<u8>> {
    if inputs.is_empty() {
        return Err(WavError::EmptyInput);
    }

    let mut buffers: Vec<PcmBuffer> = Vec::with_capacity(inputs.len());
    for (index, input) in inputs.iter().enumerate() {
        let buffer = codec::decode(input.as_ref()).map_err(|e| e.at_input(index))?;
        if let Some(reference) = buffers.first() {
            check_against(
                &reference.format,
                &buffer.format,
                index,
                options.bit_depth_policy,
            )?;
        }
        debug!("input {}: {} payload bytes", index, buffer.len());
        buffers.push(buffer);
    }

    let format = output_format(&buffers, options.bit_depth_policy);
    let samples = merge(&buffers);
    debug!(
        "concatenated {} inputs into {} payload bytes ({} Hz, {} ch, {} bit)",
        buffers.len(),
        samples.len(),
        format.sample_rate,
        format.channels,
        format.bits_per_sample
    );
    codec::write_wav_to_vec(&format, &samples)
}

/// Format of the concatenated output. `buffers` must be non-empty.
fn output_format(buffers: &[PcmBuffer], policy: BitDepthPolicy) -> FormatDescriptor {
    let mut format = buffers[0].format;
    if policy == BitDepthPolicy::LastInput {
        if let Some(last) = buffers.last() {
            format.bits_per_sample = last.format.bits_per_sample;
        }
    }
    format
}
