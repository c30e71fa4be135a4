//! # audio-wav
//!
//! Audio assembly for the captioned speech service: concatenates generated
//! segments into one contiguous buffer and packages it as a WAV container in
//! memory.

pub mod wav;

pub use wav::{apply_fade_in, apply_fade_out, decode_wav, encode_wav};

use caption_core::{AudioBuffer, AudioSegment, CaptionError, CaptionResult};

/// Concatenate segments in yield order into one contiguous buffer.
///
/// Every segment must report the same sample rate; a mismatch fails the whole
/// buffer rather than silently adopting one rate, since the rate feeds both
/// the container header and the duration every timestamp is derived from.
/// An empty segment sequence is an `EmptyOutput` error.
pub fn concat_segments(segments: &[AudioSegment]) -> CaptionResult<AudioBuffer> {
    let Some(first) = segments.first() else {
        return Err(CaptionError::EmptyOutput);
    };

    let sample_rate = first.sample_rate;
    let total: usize = segments.iter().map(|s| s.num_samples()).sum();
    let mut samples = Vec::with_capacity(total);

    for segment in segments {
        if segment.sample_rate != sample_rate {
            return Err(CaptionError::SampleRateMismatch {
                expected: sample_rate,
                found: segment.sample_rate,
            });
        }
        samples.extend_from_slice(&segment.samples);
    }

    Ok(AudioBuffer {
        samples,
        sample_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_in_order() {
        let segments = vec![
            AudioSegment::new(vec![0.1, 0.2], 24000),
            AudioSegment::new(vec![0.3], 24000),
            AudioSegment::new(vec![0.4, 0.5], 24000),
        ];

        let buffer = concat_segments(&segments).unwrap();
        assert_eq!(buffer.samples, vec![0.1, 0.2, 0.3, 0.4, 0.5]);
        assert_eq!(buffer.sample_rate, 24000);
    }

    #[test]
    fn test_concat_empty_is_empty_output() {
        let err = concat_segments(&[]).unwrap_err();
        assert!(matches!(err, CaptionError::EmptyOutput));
        assert_eq!(err.to_string(), "No audio generated");
    }

    #[test]
    fn test_concat_rate_mismatch() {
        let segments = vec![
            AudioSegment::new(vec![0.1], 24000),
            AudioSegment::new(vec![0.2], 22050),
        ];

        let err = concat_segments(&segments).unwrap_err();
        assert!(matches!(
            err,
            CaptionError::SampleRateMismatch {
                expected: 24000,
                found: 22050
            }
        ));
    }
}
