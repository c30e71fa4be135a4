//! Deterministic mock speech model.
//!
//! Stands behind the `SpeechModel` seam so the full request path runs
//! without model weights: synthesis is a faded sine tone per sentence, with
//! pitch selected by voice preset and duration proportional to text length.

use tracing::debug;

use audio_wav::{apply_fade_in, apply_fade_out};
use caption_core::{
    AudioSegment, CaptionError, CaptionResult, ModelConfig, SegmentIter, SpeechModel,
    SynthesisOptions,
};

/// Output sample rate shared by every generated segment.
pub const MOCK_SAMPLE_RATE: u32 = 24000;

/// Seconds of audio produced per input character at speed 1.0.
const SECS_PER_CHAR: f32 = 0.06;

/// Fade applied at segment edges, in milliseconds.
const EDGE_FADE_MS: f32 = 10.0;

/// Voice presets: name and base pitch in Hz.
const VOICE_PRESETS: &[(&str, f32)] = &[
    ("af_heart", 220.00),
    ("af_bella", 233.08),
    ("af_nicole", 246.94),
    ("am_adam", 146.83),
    ("am_michael", 130.81),
    ("bf_emma", 207.65),
    ("bm_george", 123.47),
];

fn voice_pitch(name: &str) -> Option<f32> {
    VOICE_PRESETS
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, pitch)| *pitch)
}

/// Mock speech model with deterministic output.
#[derive(Debug)]
pub struct MockModel {
    model_id: String,
}

impl MockModel {
    /// Create a mock model for the given configuration.
    ///
    /// Fails with a load error when the configured default voice is not a
    /// known preset, mirroring a backend that validates its voice table at
    /// load time.
    pub fn new(config: &ModelConfig) -> CaptionResult<Self> {
        if voice_pitch(&config.default_voice).is_none() {
            return Err(CaptionError::model_load(
                &config.model_id,
                format!("unknown default voice: {}", config.default_voice),
            ));
        }

        Ok(Self {
            model_id: config.model_id.clone(),
        })
    }

    /// List the available voice preset names.
    pub fn voices() -> impl Iterator<Item = &'static str> {
        VOICE_PRESETS.iter().map(|(name, _)| *name)
    }
}

impl SpeechModel for MockModel {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn generate(&self, text: &str, options: &SynthesisOptions) -> CaptionResult<SegmentIter> {
        let Some(pitch) = voice_pitch(&options.voice) else {
            return Err(CaptionError::synthesis(format!(
                "unknown voice: {}",
                options.voice
            )));
        };

        if !options.speed.is_finite() || options.speed <= 0.0 {
            return Err(CaptionError::invalid_input(format!(
                "speed must be positive, got {}",
                options.speed
            )));
        }

        let sentences = split_sentences(text);
        debug!(
            text_len = text.len(),
            segments = sentences.len(),
            voice = %options.voice,
            lang = %options.lang,
            speed = options.speed,
            "Mock generation planned"
        );

        let speed = options.speed;
        Ok(Box::new(
            sentences
                .into_iter()
                .map(move |sentence| Ok(synthesize_segment(&sentence, pitch, speed))),
        ))
    }
}

/// Split input into sentence-ish chunks, one generated segment each.
fn split_sentences(text: &str) -> Vec<String> {
    text.split_inclusive(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

fn synthesize_segment(text: &str, pitch_hz: f32, speed: f32) -> AudioSegment {
    let chars = text.chars().count();
    let duration_secs = chars as f32 * SECS_PER_CHAR / speed;
    let num_samples = ((duration_secs * MOCK_SAMPLE_RATE as f32).round() as usize).max(1);

    let mut samples: Vec<f32> = (0..num_samples)
        .map(|i| {
            let t = i as f32 / MOCK_SAMPLE_RATE as f32;
            0.3 * (2.0 * std::f32::consts::PI * pitch_hz * t).sin()
        })
        .collect();

    apply_fade_in(&mut samples, EDGE_FADE_MS, MOCK_SAMPLE_RATE);
    apply_fade_out(&mut samples, EDGE_FADE_MS, MOCK_SAMPLE_RATE);

    AudioSegment::new(samples, MOCK_SAMPLE_RATE)
}
