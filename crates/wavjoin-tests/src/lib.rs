//! wavjoin End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the two public transforms:
//!
//! - **Concatenation**: several WAV files -> one WAV file
//! - **PCM wrapping**: headerless PCM -> WAV file
//!
//! Output is checked with an independent header parser
//! ([`format_validators::validate_wav`]) and, where possible, by reading it
//! back with `hound`.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wavjoin-tests
//! ```

pub mod fixtures;
pub mod format_validators;

// Re-export commonly used items
pub use fixtures::{hound_wav, ramp_i16, samples_to_le_bytes};
pub use format_validators::{validate_wav, FormatError, WavInfo};
