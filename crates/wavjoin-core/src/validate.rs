//! Format compatibility checks for concatenation.

use crate::error::{FormatField, WavError, WavResult};
use crate::format::FormatDescriptor;
use crate::options::BitDepthPolicy;

/// Checks that every format can be concatenated with the first.
///
/// The first format is the reference. Sample rate and channel count must
/// match it; bit depth is compared only under [`BitDepthPolicy::Strict`].
///
/// # Returns
/// `EmptyInput` for an empty slice, `FormatMismatch` naming the first
/// offending input otherwise
pub fn check_compatible(formats: &[FormatDescriptor], policy: BitDepthPolicy) -> WavResult<()> {
    let (reference, rest) = formats.split_first().ok_or(WavError::EmptyInput)?;
    for (offset, candidate) in rest.iter().enumerate() {
        check_against(reference, candidate, offset + 1, policy)?;
    }
    Ok(())
}

/// Compares one candidate format against the reference.
///
/// `index` is the candidate's position in the batch, reported on mismatch.
pub fn check_against(
    reference: &FormatDescriptor,
    candidate: &FormatDescriptor,
    index: usize,
    policy: BitDepthPolicy,
) -> WavResult<()> {
    if candidate.sample_rate != reference.sample_rate {
        return Err(WavError::mismatch(
            index,
            FormatField::SampleRate,
            reference.sample_rate,
            candidate.sample_rate,
        ));
    }
    if candidate.channels != reference.channels {
        return Err(WavError::mismatch(
            index,
            FormatField::Channels,
            u32::from(reference.channels),
            u32::from(candidate.channels),
        ));
    }
    if policy == BitDepthPolicy::Strict && candidate.bits_per_sample != reference.bits_per_sample
    {
        return Err(WavError::mismatch(
            index,
            FormatField::BitsPerSample,
            u32::from(reference.bits_per_sample),
            u32::from(candidate.bits_per_sample),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_empty_is_rejected() {
        let err = check_compatible(&[], BitDepthPolicy::LastInput).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyInput);
    }

    #[test]
    fn test_single_format_is_compatible() {
        check_compatible(&[FormatDescriptor::mono(16000)], BitDepthPolicy::Strict).unwrap();
    }

    #[test]
    fn test_identical_formats() {
        let f = FormatDescriptor::stereo(44100);
        check_compatible(&[f, f, f], BitDepthPolicy::Strict).unwrap();
    }

    #[test]
    fn test_sample_rate_mismatch_reports_index() {
        let formats = [
            FormatDescriptor::mono(16000),
            FormatDescriptor::mono(16000),
            FormatDescriptor::mono(22050),
        ];
        let err = check_compatible(&formats, BitDepthPolicy::LastInput).unwrap_err();
        match err {
            WavError::FormatMismatch {
                index,
                field,
                expected,
                found,
            } => {
                assert_eq!(index, 2);
                assert_eq!(field, FormatField::SampleRate);
                assert_eq!(expected, 16000);
                assert_eq!(found, 22050);
            }
            other => panic!("expected FormatMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_channel_mismatch() {
        let formats = [FormatDescriptor::stereo(44100), FormatDescriptor::mono(44100)];
        let err = check_compatible(&formats, BitDepthPolicy::LastInput).unwrap_err();
        assert!(matches!(
            err,
            WavError::FormatMismatch {
                field: FormatField::Channels,
                ..
            }
        ));
    }

    #[test]
    fn test_bit_depth_ignored_by_default() {
        let formats = [
            FormatDescriptor::new(16000, 1, 16),
            FormatDescriptor::new(16000, 1, 24),
        ];
        check_compatible(&formats, BitDepthPolicy::LastInput).unwrap();
    }

    #[test]
    fn test_bit_depth_checked_when_strict() {
        let formats = [
            FormatDescriptor::new(16000, 1, 16),
            FormatDescriptor::new(16000, 1, 24),
        ];
        let err = check_compatible(&formats, BitDepthPolicy::Strict).unwrap_err();
        assert!(matches!(
            err,
            WavError::FormatMismatch {
                index: 1,
                field: FormatField::BitsPerSample,
                expected: 16,
                found: 24,
            }
        ));
    }
}
