//! Pcm2wav command implementation
//!
//! Wraps a headerless PCM capture in a canonical 44-byte WAV header.

use anyhow::Result;
use std::process::ExitCode;

use wavjoin_core::{pcm_to_wav, FormatDescriptor, PcmBuffer};

use super::reporting::{finish, read_input, write_output};
use crate::json_output::{JsonError, WavSummary};

/// Run the pcm2wav command
///
/// # Arguments
/// * `input` - Raw PCM file
/// * `output` - Output WAV path
/// * `format` - Sample rate, channels and bit depth of the PCM data
/// * `json` - Print machine-readable output
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(input: &str, output: &str, format: FormatDescriptor, json: bool) -> Result<ExitCode> {
    let outcome = wrap_file(input, output, format);
    finish(outcome, Some(output), json)
}

fn wrap_file(input: &str, output: &str, format: FormatDescriptor) -> Result<WavSummary, JsonError> {
    let pcm = read_input(input)?;
    let wav = pcm_to_wav(
        &pcm,
        format.sample_rate,
        format.channels,
        format.bits_per_sample,
    );
    write_output(output, &wav)?;
    Ok(WavSummary::from_buffer(&PcmBuffer::new(format, pcm)))
}
