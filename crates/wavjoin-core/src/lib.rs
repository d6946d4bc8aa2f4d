//! wavjoin core - WAV concatenation and PCM header synthesis
//!
//! This crate provides two stateless transforms over linear PCM WAV data:
//!
//! - [`concat_wav`]: decode several WAV buffers, check that their formats
//!   agree, join their sample data in order, and encode one canonical WAV.
//! - [`pcm_to_wav`]: prepend a canonical 44-byte header to headerless PCM.
//!
//! Everything operates on in-memory byte slices. No function touches the
//! filesystem or any shared state, so all of them are safe to call
//! concurrently.
//!
//! # Example
//!
//! ```
//! use wavjoin_core::{codec, concat_wav, pcm_to_wav};
//!
//! let a = pcm_to_wav(&[1, 0, 2, 0], 16000, 1, 16);
//! let b = pcm_to_wav(&[3, 0], 16000, 1, 16);
//!
//! let joined = concat_wav(&[a, b]).unwrap();
//! let buffer = codec::decode(&joined).unwrap();
//! assert_eq!(buffer.samples, vec![1, 0, 2, 0, 3, 0]);
//! ```

pub mod codec;
pub mod concat;
pub mod error;
pub mod format;
pub mod header;
pub mod options;
pub mod pcm;
pub mod validate;

// Re-export main types
pub use concat::{concat_buffers, concat_wav, concat_wav_with, merge};
pub use error::{EnglishMessages, ErrorKind, FormatField, MessageCatalog, WavError, WavResult};
pub use format::FormatDescriptor;
pub use header::{build_header, pcm_to_wav};
pub use options::{BitDepthPolicy, ConcatOptions};
pub use pcm::PcmBuffer;
pub use validate::check_compatible;
