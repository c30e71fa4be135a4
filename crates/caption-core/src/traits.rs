//! Trait seam for the external speech model.

use crate::error::CaptionResult;
use crate::types::{AudioSegment, Lang};

/// Lazy, finite, not-restartable sequence of generated audio segments.
pub type SegmentIter = Box<dyn Iterator<Item = CaptionResult<AudioSegment>> + Send>;

/// A loaded text-to-speech model handle.
///
/// Implementations wrap the external synthesis backend. Handles are shared
/// across requests after first load and must not carry request state.
pub trait SpeechModel: Send + Sync {
    /// Identifier this handle was loaded from.
    fn model_id(&self) -> &str;

    /// Synthesize `text`, yielding audio segments in emission order.
    ///
    /// # Arguments
    /// * `text` - Raw input text (may be empty; an empty input yields an
    ///   empty sequence)
    /// * `options` - Voice, speed, and language selection
    fn generate(&self, text: &str, options: &SynthesisOptions) -> CaptionResult<SegmentIter>;
}

/// Options for one synthesis invocation.
#[derive(Debug, Clone)]
pub struct SynthesisOptions {
    /// Voice preset name (e.g. "af_heart").
    pub voice: String,
    /// Playback-rate multiplier.
    pub speed: f32,
    /// Synthesis language.
    pub lang: Lang,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            voice: "af_heart".to_string(),
            speed: 1.0,
            lang: Lang::default(),
        }
    }
}

impl SynthesisOptions {
    /// Create synthesis options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the voice preset.
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    /// Set the speed multiplier.
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Set the language.
    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }
}
