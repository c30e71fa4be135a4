//! Core data types for the captioned speech pipeline.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Supported synthesis languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Lang {
    /// American English.
    #[default]
    #[serde(rename = "en-us")]
    En,
    /// British English.
    #[serde(rename = "en-gb")]
    EnGb,
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lang::En => write!(f, "en-us"),
            Lang::EnGb => write!(f, "en-gb"),
        }
    }
}

/// One step of the model's audio generation: a sample buffer plus its rate.
#[derive(Debug, Clone)]
pub struct AudioSegment {
    /// PCM samples (f32, mono, in [-1, 1]).
    pub samples: Arc<[f32]>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl AudioSegment {
    /// Create a new audio segment.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples: samples.into(),
            sample_rate,
        }
    }

    /// Get the number of samples in this segment.
    pub fn num_samples(&self) -> usize {
        self.samples.len()
    }

    /// Get the duration of this segment in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// A contiguous sample buffer built by concatenating segments in yield order.
#[derive(Debug, Clone)]
pub struct AudioBuffer {
    /// PCM samples (f32, mono).
    pub samples: Vec<f32>,
    /// Sample rate in Hz, shared by every source segment.
    pub sample_rate: u32,
}

impl AudioBuffer {
    /// Get the number of samples in this buffer.
    pub fn num_samples(&self) -> usize {
        self.samples.len()
    }

    /// Total duration in seconds: sample count divided by sample rate.
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Word-level timing estimate for caption alignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordTimestamp {
    /// The word text, a whitespace-delimited substring of the input.
    pub word: String,
    /// Start time in seconds, rounded to 3 decimals.
    pub start_time: f64,
    /// End time in seconds, rounded to 3 decimals.
    pub end_time: f64,
}
