//! Unified error types for the captioned speech service.

/// Main error type for synthesis and encoding operations.
#[derive(Debug, thiserror::Error)]
pub enum CaptionError {
    /// Model loading failed (missing weights, incompatible runtime, bad config).
    #[error("model load failed for {model_id}: {reason}")]
    ModelLoad { model_id: String, reason: String },

    /// Generation yielded zero audio segments.
    ///
    /// The display text is part of the API contract: it is returned verbatim
    /// as the HTTP error detail.
    #[error("No audio generated")]
    EmptyOutput,

    /// Model-side synthesis failure.
    #[error("synthesis failed: {0}")]
    Synthesis(String),

    /// Generated segments disagree on sample rate.
    #[error("sample rate mismatch: expected {expected} Hz, got {found} Hz")]
    SampleRateMismatch { expected: u32, found: u32 },

    /// Audio container encoding or decoding failed.
    #[error("audio encoding failed: {0}")]
    Encoding(String),

    /// Invalid input provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with CaptionError.
pub type CaptionResult<T> = Result<T, CaptionError>;

impl CaptionError {
    /// Create a model load error.
    pub fn model_load(model_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ModelLoad {
            model_id: model_id.into(),
            reason: reason.into(),
        }
    }

    /// Create a synthesis error with message.
    pub fn synthesis(msg: impl Into<String>) -> Self {
        Self::Synthesis(msg.into())
    }

    /// Create an encoding error with message.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Create an invalid input error with message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a config error with message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_output_display() {
        // Exact wording is load-bearing for the HTTP error body.
        assert_eq!(CaptionError::EmptyOutput.to_string(), "No audio generated");
    }

    #[test]
    fn test_error_display() {
        let err = CaptionError::model_load("kokoro", "weights not found");
        assert_eq!(
            err.to_string(),
            "model load failed for kokoro: weights not found"
        );

        let err = CaptionError::SampleRateMismatch {
            expected: 24000,
            found: 22050,
        };
        assert_eq!(
            err.to_string(),
            "sample rate mismatch: expected 24000 Hz, got 22050 Hz"
        );
    }

    #[test]
    fn test_error_constructors() {
        let err = CaptionError::synthesis("unknown voice");
        assert!(matches!(err, CaptionError::Synthesis(_)));

        let err = CaptionError::invalid_input("speed must be positive");
        assert!(matches!(err, CaptionError::InvalidInput(_)));
    }
}
