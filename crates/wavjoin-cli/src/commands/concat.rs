//! Concat command implementation
//!
//! Joins several WAV files with identical sample rate and channel count into
//! one canonical WAV file.

use anyhow::Result;
use std::fs;
use std::process::ExitCode;

use wavjoin_core::{codec, concat_wav_with, BitDepthPolicy, ConcatOptions};

use super::reporting::{finish, read_input, write_output};
use crate::json_output::{error_codes, JsonError, WavSummary};

/// Run the concat command
///
/// # Arguments
/// * `inputs` - WAV files to join, in order
/// * `output` - Output WAV path
/// * `strict_bit_depth` - Reject inputs whose bit depth differs from the first
/// * `config` - Optional JSON file with [`ConcatOptions`]
/// * `json` - Print machine-readable output
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    inputs: &[String],
    output: &str,
    strict_bit_depth: bool,
    config: Option<&str>,
    json: bool,
) -> Result<ExitCode> {
    let outcome = load_options(config, strict_bit_depth)
        .and_then(|options| concat_files(inputs, output, &options));
    finish(outcome, Some(output), json)
}

/// Resolves options: the config file first, then command-line overrides.
pub(crate) fn load_options(
    config: Option<&str>,
    strict_bit_depth: bool,
) -> Result<ConcatOptions, JsonError> {
    let mut options = match config {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| {
                JsonError::new(
                    error_codes::FILE_READ,
                    format!("Failed to read options file {}: {}", path, e),
                )
                .with_file(path)
            })?;
            serde_json::from_str::<ConcatOptions>(&text).map_err(|e| {
                JsonError::new(
                    error_codes::CONFIG_PARSE,
                    format!("Failed to parse options file {}: {}", path, e),
                )
                .with_file(path)
            })?
        }
        None => ConcatOptions::default(),
    };
    if strict_bit_depth {
        options.bit_depth_policy = BitDepthPolicy::Strict;
    }
    Ok(options)
}

fn concat_files(
    inputs: &[String],
    output: &str,
    options: &ConcatOptions,
) -> Result<WavSummary, JsonError> {
    let buffers = inputs
        .iter()
        .map(|path| read_input(path))
        .collect::<Result<Vec<_>, _>>()?;

    let joined =
        concat_wav_with(&buffers, options).map_err(|e| JsonError::from_wav_error(&e, inputs))?;
    write_output(output, &joined)?;

    let decoded = codec::decode(&joined).map_err(|e| JsonError::from_wav_error(&e, &[]))?;
    Ok(WavSummary::from_buffer(&decoded))
}
