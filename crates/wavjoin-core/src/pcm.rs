//! Decoded PCM sample data.

use crate::format::FormatDescriptor;

/// Raw interleaved sample bytes together with their format.
///
/// Buffers are replaced, not edited: concatenation produces a new buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmBuffer {
    /// Format of the samples.
    pub format: FormatDescriptor,
    /// Interleaved little-endian sample bytes, as stored in the `data` chunk.
    pub samples: Vec<u8>,
}

impl PcmBuffer {
    /// Creates a buffer from a format and raw sample bytes.
    pub fn new(format: FormatDescriptor, samples: Vec<u8>) -> Self {
        Self { format, samples }
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the buffer holds no sample bytes.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of complete frames in the payload.
    pub fn frame_count(&self) -> usize {
        match self.format.frame_size() {
            0 => 0,
            size => self.samples.len() / size,
        }
    }

    /// Returns true if the payload is a whole number of frames.
    pub fn is_frame_aligned(&self) -> bool {
        match self.format.frame_size() {
            0 => self.samples.is_empty(),
            size => self.samples.len() % size == 0,
        }
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.format.sample_rate == 0 {
            return 0.0;
        }
        self.frame_count() as f64 / f64::from(self.format.sample_rate)
    }

    /// BLAKE3 hash of the sample bytes only (not the container).
    pub fn pcm_hash(&self) -> String {
        blake3::hash(&self.samples).to_hex().to_string()
    }
}
