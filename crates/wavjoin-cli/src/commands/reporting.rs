use std::fs;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use log::debug;

use crate::json_output::{error_codes, CommandOutput, JsonError, WavSummary};

/// Reads a whole input file, reporting failures as a CLI_001 error.
pub(crate) fn read_input(path: &str) -> Result<Vec<u8>, JsonError> {
    let bytes = fs::read(path).map_err(|e| {
        JsonError::new(error_codes::FILE_READ, format!("Failed to read {}: {}", path, e))
            .with_file(path)
    })?;
    debug!("read {} bytes from {}", bytes.len(), path);
    Ok(bytes)
}

/// Writes the output file, reporting failures as a CLI_002 error.
pub(crate) fn write_output(path: &str, bytes: &[u8]) -> Result<(), JsonError> {
    fs::write(path, bytes).map_err(|e| {
        JsonError::new(
            error_codes::FILE_WRITE,
            format!("Failed to write {}: {}", path, e),
        )
        .with_file(path)
    })?;
    debug!("wrote {} bytes to {}", bytes.len(), path);
    Ok(())
}

/// Prints the outcome of a command and maps it to an exit code.
///
/// `output` is the written file, if the command writes one.
pub(crate) fn finish(
    outcome: Result<WavSummary, JsonError>,
    output: Option<&str>,
    json: bool,
) -> Result<ExitCode> {
    match outcome {
        Ok(summary) => {
            if json {
                CommandOutput::success(output.map(str::to_string), summary).print()?;
            } else {
                if let Some(path) = output {
                    println!("{} Wrote {}", "SUCCESS".green().bold(), path);
                }
                print_summary(&summary);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if json {
                CommandOutput::failure(error).print()?;
            } else {
                print_failure(&error);
            }
            Ok(ExitCode::from(1))
        }
    }
}

fn print_summary(summary: &WavSummary) {
    let format = &summary.format;
    println!(
        "  {} {} Hz, {} ch, {} bit",
        "Format:".dimmed(),
        format.sample_rate,
        format.channels,
        format.bits_per_sample
    );
    println!(
        "  {} byte rate {}, block align {}",
        "Derived:".dimmed(),
        summary.byte_rate,
        summary.block_align
    );
    println!(
        "  {} {} bytes, {} frames, {:.3} s",
        "Payload:".dimmed(),
        summary.payload_bytes,
        summary.frames,
        summary.duration_seconds
    );
    if !summary.frame_aligned {
        println!(
            "  {} payload ends with a partial frame",
            "!".yellow().bold()
        );
    }
    println!("  {} {}", "PCM hash:".dimmed(), summary.pcm_hash);
}

fn print_failure(error: &JsonError) {
    let location = match (&error.file, error.input) {
        (Some(file), _) => format!(" ({})", file),
        (None, Some(index)) => format!(" (input {})", index),
        (None, None) => String::new(),
    };
    eprintln!(
        "{} [{}] {}{}",
        "FAILED".red().bold(),
        error.code,
        error.message,
        location
    );
}
