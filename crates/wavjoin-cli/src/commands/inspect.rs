//! Inspect command implementation
//!
//! Decodes a WAV file and prints its format and payload statistics.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use wavjoin_core::codec;

use super::reporting::{finish, read_input};
use crate::json_output::{JsonError, WavSummary};

/// Run the inspect command
///
/// # Arguments
/// * `input` - WAV file to inspect
/// * `json` - Print machine-readable output
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(input: &str, json: bool) -> Result<ExitCode> {
    if !json {
        println!("{} {}", "Inspecting:".cyan().bold(), input);
    }
    finish(inspect_file(input), None, json)
}

fn inspect_file(input: &str) -> Result<WavSummary, JsonError> {
    let bytes = read_input(input)?;
    let buffer = codec::decode(&bytes)
        .map_err(|e| JsonError::from_wav_error(&e, &[]).with_file(input))?;
    Ok(WavSummary::from_buffer(&buffer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use wavjoin_core::pcm_to_wav;

    #[test]
    fn test_inspect_valid_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tone.wav");
        fs::write(&path, pcm_to_wav(&[0; 400], 44100, 2, 16)).unwrap();

        let summary = inspect_file(&path.to_string_lossy()).unwrap();
        assert_eq!(summary.format.sample_rate, 44100);
        assert_eq!(summary.format.channels, 2);
        assert_eq!(summary.frames, 100);
    }

    #[test]
    fn test_inspect_invalid_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bogus.wav");
        fs::write(&path, b"definitely not RIFF data").unwrap();
        let path = path.to_string_lossy().into_owned();

        let err = inspect_file(&path).unwrap_err();
        assert_eq!(err.code, "WAV_001");
        assert_eq!(err.kind.as_deref(), Some("invalid_format"));
        assert_eq!(err.file, Some(path));
    }
}
