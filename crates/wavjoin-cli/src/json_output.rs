//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json`. The output is a single [`CommandOutput`]
//! object on stdout, with stable error codes so scripts never have to match
//! on message text.

use serde::{Deserialize, Serialize};
use wavjoin_core::{FormatDescriptor, PcmBuffer, WavError};

/// Error codes for CLI-level failures.
///
/// Library failures pass through their own `WAV_XXX` codes.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// File could not be written
    pub const FILE_WRITE: &str = "CLI_002";
    /// Options file could not be parsed
    pub const CONFIG_PARSE: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "WAV_002")
    pub code: String,
    /// Error kind for library errors ("invalid_format", "format_mismatch", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Human-readable error message
    pub message: String,
    /// File the error relates to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Index of the failing input (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<usize>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            kind: None,
            message: message.into(),
            file: None,
            input: None,
        }
    }

    /// Converts a library error, resolving the input index to a file name.
    pub fn from_wav_error(err: &WavError, files: &[String]) -> Self {
        let input = err.input_index();
        Self {
            code: err.code().to_string(),
            kind: Some(err.kind().as_str().to_string()),
            message: err.to_string(),
            file: input.and_then(|i| files.get(i).cloned()),
            input,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// Summary of a WAV buffer, used by `inspect` and as the result of writers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WavSummary {
    /// Decoded format
    pub format: FormatDescriptor,
    /// Byte rate derived from the format
    pub byte_rate: u32,
    /// Block align derived from the format
    pub block_align: u16,
    /// Payload length in bytes
    pub payload_bytes: usize,
    /// Number of whole frames
    pub frames: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// Whether the payload is a whole number of frames
    pub frame_aligned: bool,
    /// BLAKE3 hash of the payload
    pub pcm_hash: String,
}

impl WavSummary {
    /// Summarizes a decoded buffer.
    pub fn from_buffer(buffer: &PcmBuffer) -> Self {
        Self {
            format: buffer.format,
            byte_rate: buffer.format.byte_rate(),
            block_align: buffer.format.block_align(),
            payload_bytes: buffer.len(),
            frames: buffer.frame_count(),
            duration_seconds: buffer.duration_seconds(),
            frame_aligned: buffer.is_frame_aligned(),
            pcm_hash: buffer.pcm_hash(),
        }
    }
}

/// JSON output for every command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOutput {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Path of the written file, for commands that write one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Summary of the resulting (or inspected) WAV, on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<WavSummary>,
}

impl CommandOutput {
    /// Creates a successful output.
    pub fn success(output: Option<String>, result: WavSummary) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            output,
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(error: JsonError) -> Self {
        Self {
            success: false,
            errors: vec![error],
            output: None,
            result: None,
        }
    }

    /// Prints the output as pretty JSON on stdout.
    pub fn print(&self) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        println!("{}", json);
        Ok(())
    }
}
