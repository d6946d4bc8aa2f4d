//! Audio format parameters shared by every component.

use serde::{Deserialize, Serialize};

/// Sample rate, channel count, and bit depth of a linear PCM stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormatDescriptor {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
}

impl FormatDescriptor {
    /// Creates a format descriptor.
    pub fn new(sample_rate: u32, channels: u16, bits_per_sample: u16) -> Self {
        Self {
            sample_rate,
            channels,
            bits_per_sample,
        }
    }

    /// Creates a mono 16-bit format.
    pub fn mono(sample_rate: u32) -> Self {
        Self::new(sample_rate, 1, 16)
    }

    /// Creates a stereo 16-bit format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self::new(sample_rate, 2, 16)
    }

    /// Calculates block align (bytes per frame), `channels * bits / 8`.
    ///
    /// Bit depths that are not a multiple of 8 truncate.
    pub fn block_align(&self) -> u16 {
        (u64::from(self.channels) * u64::from(self.bits_per_sample) / 8) as u16
    }

    /// Calculates byte rate (bytes per second), `rate * channels * bits / 8`.
    pub fn byte_rate(&self) -> u32 {
        (u64::from(self.sample_rate) * u64::from(self.channels) * u64::from(self.bits_per_sample)
            / 8) as u32
    }

    /// Size of one frame in bytes, without the 16-bit truncation of `block_align`.
    pub fn frame_size(&self) -> usize {
        usize::from(self.channels) * usize::from(self.bits_per_sample) / 8
    }
}
