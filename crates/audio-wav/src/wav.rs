//! In-memory WAV container I/O.

use hound::{SampleFormat, WavSpec, WavWriter};
use std::io::Cursor;

use caption_core::{AudioBuffer, CaptionError, CaptionResult};

/// Encode a sample buffer as a 16-bit mono WAV container in memory.
pub fn encode_wav(buffer: &AudioBuffer) -> CaptionResult<Vec<u8>> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: buffer.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = WavWriter::new(&mut cursor, spec)
        .map_err(|e| CaptionError::encoding(e.to_string()))?;

    for &sample in &buffer.samples {
        let sample_i16 = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        writer
            .write_sample(sample_i16)
            .map_err(|e| CaptionError::encoding(e.to_string()))?;
    }

    writer
        .finalize()
        .map_err(|e| CaptionError::encoding(e.to_string()))?;

    Ok(cursor.into_inner())
}

/// Decode a WAV container from memory into samples and a sample rate.
pub fn decode_wav(bytes: &[u8]) -> CaptionResult<(Vec<f32>, u32)> {
    let mut reader = hound::WavReader::new(Cursor::new(bytes))
        .map_err(|e| CaptionError::encoding(format!("wav read failed: {e}")))?;

    let spec = reader.spec();
    let sample_rate = spec.sample_rate;

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Int => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| CaptionError::encoding(format!("wav read failed: {e}")))?
        }
        SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CaptionError::encoding(format!("wav read failed: {e}")))?,
    };

    Ok((samples, sample_rate))
}

/// Apply a Hann-window fade-in over the first `fade_ms` of `samples`.
pub fn apply_fade_in(samples: &mut [f32], fade_ms: f32, sample_rate: u32) {
    let fade_samples = ((fade_ms / 1000.0) * sample_rate as f32) as usize;
    let fade_samples = fade_samples.min(samples.len());

    for i in 0..fade_samples {
        let t = i as f32 / fade_samples.max(1) as f32;
        let gain = 0.5 * (1.0 - (std::f32::consts::PI * t).cos());
        samples[i] *= gain;
    }
}

/// Apply a Hann-window fade-out over the last `fade_ms` of `samples`.
pub fn apply_fade_out(samples: &mut [f32], fade_ms: f32, sample_rate: u32) {
    let fade_samples = ((fade_ms / 1000.0) * sample_rate as f32) as usize;
    let fade_samples = fade_samples.min(samples.len());
    let start = samples.len().saturating_sub(fade_samples);

    for i in 0..fade_samples {
        let t = i as f32 / fade_samples.max(1) as f32;
        let gain = 0.5 * (1.0 + (std::f32::consts::PI * t).cos());
        samples[start + i] *= gain;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(samples: Vec<f32>, sample_rate: u32) -> AudioBuffer {
        AudioBuffer {
            samples,
            sample_rate,
        }
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let samples: Vec<f32> = (0..4800)
            .map(|i| 0.5 * (i as f32 * 0.01).sin())
            .collect();
        let original = buffer(samples.clone(), 24000);

        let bytes = encode_wav(&original).unwrap();
        let (decoded, rate) = decode_wav(&bytes).unwrap();

        assert_eq!(rate, 24000);
        assert_eq!(decoded.len(), samples.len());
        for (a, b) in decoded.iter().zip(&samples) {
            // 16-bit quantization error bound.
            assert!((a - b).abs() < 1.0 / 16384.0);
        }
    }

    #[test]
    fn test_encode_has_riff_header() {
        let bytes = encode_wav(&buffer(vec![0.0; 100], 24000)).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
    }

    #[test]
    fn test_sample_clamping() {
        // Out-of-range samples must clamp, not wrap.
        let bytes = encode_wav(&buffer(vec![2.0, -2.0], 24000)).unwrap();
        let (decoded, _) = decode_wav(&bytes).unwrap();

        assert!(decoded[0] > 0.999);
        assert!(decoded[1] < -0.999);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode_wav(&[0u8; 16]).unwrap_err();
        assert!(matches!(err, CaptionError::Encoding(_)));
    }

    #[test]
    fn test_fade_in_out() {
        let mut samples = vec![1.0f32; 2400];
        apply_fade_in(&mut samples, 10.0, 24000);
        apply_fade_out(&mut samples, 10.0, 24000);

        assert_eq!(samples[0], 0.0);
        assert!(samples[1] < samples[2]);
        assert!(*samples.last().unwrap() < 0.01);
        // Middle untouched.
        assert_eq!(samples[1200], 1.0);
    }
}
