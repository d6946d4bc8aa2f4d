//! Concatenation options.

use serde::{Deserialize, Serialize};

/// How bit depth is treated across concatenation inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BitDepthPolicy {
    /// Bit depth is not compared; the output uses the last input's bit depth.
    #[default]
    LastInput,
    /// Inputs with a bit depth differing from the first are rejected.
    Strict,
}

/// Options for [`crate::concat_wav_with`].
///
/// Deserializable from JSON, e.g. `{"bit_depth_policy": "strict"}`. Missing
/// fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConcatOptions {
    /// Bit depth handling.
    pub bit_depth_policy: BitDepthPolicy,
}

impl ConcatOptions {
    /// Options that reject mixed bit depths.
    pub fn strict() -> Self {
        Self {
            bit_depth_policy: BitDepthPolicy::Strict,
        }
    }
}
