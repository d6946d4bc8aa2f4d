//! Error types for WAV decoding, concatenation, and encoding.
//!
//! Error identity is carried by [`ErrorKind`] and the stable code returned by
//! [`WavError::code`]. Human-readable text is produced separately through a
//! [`MessageCatalog`], so callers can swap the display language without
//! matching on message strings.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Result type for WAV operations.
pub type WavResult<T> = Result<T, WavError>;

/// The four kinds of failure a WAV operation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed or non-PCM WAV input.
    InvalidFormat,
    /// Sample rate, channel count, or (strict mode) bit depth differs between inputs.
    FormatMismatch,
    /// Zero inputs were supplied to concatenation.
    EmptyInput,
    /// Underlying write failure while encoding.
    Io,
}

impl ErrorKind {
    /// Returns the snake_case name used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidFormat => "invalid_format",
            ErrorKind::FormatMismatch => "format_mismatch",
            ErrorKind::EmptyInput => "empty_input",
            ErrorKind::Io => "io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A format field compared across concatenation inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatField {
    /// Sample rate in Hz.
    SampleRate,
    /// Number of interleaved channels.
    Channels,
    /// Bits per sample.
    BitsPerSample,
}

impl fmt::Display for FormatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormatField::SampleRate => "sample rate",
            FormatField::Channels => "channel count",
            FormatField::BitsPerSample => "bits per sample",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while decoding, validating, or encoding WAV data.
#[derive(Debug, Error)]
pub enum WavError {
    /// Input is not a well-formed linear PCM RIFF/WAVE container.
    #[error("invalid WAV data: {message}")]
    InvalidFormat {
        /// What was wrong.
        message: String,
        /// Byte offset of the offending structure, if known.
        offset: Option<usize>,
    },

    /// A concatenation input disagrees with the reference format.
    #[error("{field} mismatch at input {index}: expected {expected}, found {found}")]
    FormatMismatch {
        /// Index of the offending input.
        index: usize,
        /// Field that differed.
        field: FormatField,
        /// Value taken from the first input.
        expected: u32,
        /// Value found in the offending input.
        found: u32,
    },

    /// No inputs were supplied.
    #[error("no WAV inputs to concatenate")]
    EmptyInput,

    /// Payload length cannot be described by the 32-bit RIFF size fields.
    #[error("payload of {len} bytes does not fit in a WAV container")]
    PayloadTooLarge {
        /// Payload length in bytes.
        len: usize,
    },

    /// I/O error while writing the container.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error raised while processing one input of a batch.
    #[error("input {index}: {source}")]
    Input {
        /// Index of the failing input.
        index: usize,
        /// The underlying error.
        #[source]
        source: Box<WavError>,
    },
}

impl WavError {
    /// Creates an invalid-format error without an offset.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
            offset: None,
        }
    }

    /// Creates an invalid-format error at a byte offset.
    pub fn invalid_at(message: impl Into<String>, offset: usize) -> Self {
        Self::InvalidFormat {
            message: message.into(),
            offset: Some(offset),
        }
    }

    /// Creates a format-mismatch error.
    pub fn mismatch(index: usize, field: FormatField, expected: u32, found: u32) -> Self {
        Self::FormatMismatch {
            index,
            field,
            expected,
            found,
        }
    }

    /// Tags this error with the index of the input that produced it.
    pub fn at_input(self, index: usize) -> Self {
        Self::Input {
            index,
            source: Box::new(self),
        }
    }

    /// Returns the error with any input tagging stripped.
    pub fn root(&self) -> &WavError {
        match self {
            WavError::Input { source, .. } => source.root(),
            other => other,
        }
    }

    /// Returns the index of the failing input, if the error is tied to one.
    pub fn input_index(&self) -> Option<usize> {
        match self {
            WavError::Input { index, .. } => Some(*index),
            WavError::FormatMismatch { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Returns the kind of failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            WavError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            WavError::FormatMismatch { .. } => ErrorKind::FormatMismatch,
            WavError::EmptyInput => ErrorKind::EmptyInput,
            WavError::PayloadTooLarge { .. } | WavError::Io(_) => ErrorKind::Io,
            WavError::Input { source, .. } => source.kind(),
        }
    }

    /// Returns a stable error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            WavError::InvalidFormat { .. } => "WAV_001",
            WavError::FormatMismatch { .. } => "WAV_002",
            WavError::EmptyInput => "WAV_003",
            WavError::Io(_) => "WAV_004",
            WavError::PayloadTooLarge { .. } => "WAV_005",
            WavError::Input { source, .. } => source.code(),
        }
    }

    /// Returns the error category.
    pub fn category(&self) -> &'static str {
        "wav"
    }

    /// Renders the error through a message catalog.
    pub fn render(&self, catalog: &dyn MessageCatalog) -> String {
        catalog.message(self)
    }
}

/// Produces display text for errors.
///
/// Implement this to localize messages; the default [`EnglishMessages`]
/// uses the `Display` output.
pub trait MessageCatalog {
    /// Returns the message for `error`.
    fn message(&self, error: &WavError) -> String;
}

/// English messages, identical to `Display`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishMessages;

impl MessageCatalog for EnglishMessages {
    fn message(&self, error: &WavError) -> String {
        error.to_string()
    }
}
