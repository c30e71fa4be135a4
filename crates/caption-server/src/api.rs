//! API request/response types and transport-level error mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use caption_core::{CaptionError, WordTimestamp};

/// Request body for `POST /dev/captioned_speech`.
#[derive(Debug, Clone, Deserialize)]
pub struct CaptionedSpeechRequest {
    /// Requested model name. Advisory only; one model is served.
    #[serde(default = "default_model")]
    pub model: String,
    /// Text to synthesize. Required; may be empty.
    pub input: String,
    /// Voice preset name.
    #[serde(default = "default_voice")]
    pub voice: String,
    /// Playback-rate multiplier.
    #[serde(default = "default_speed")]
    pub speed: f32,
    /// Requested container format. Accepted for contract compatibility;
    /// the response always carries WAV.
    #[serde(default = "default_response_format")]
    pub response_format: String,
    /// Streaming flag. Accepted but unused; only non-streaming output is
    /// produced.
    #[serde(default)]
    pub stream: bool,
}

fn default_model() -> String {
    "kokoro".to_string()
}

fn default_voice() -> String {
    "af_heart".to_string()
}

fn default_speed() -> f32 {
    1.0
}

fn default_response_format() -> String {
    "mp3".to_string()
}

/// Response body for `POST /dev/captioned_speech`.
#[derive(Debug, Clone, Serialize)]
pub struct CaptionedSpeechResponse {
    /// Base64-encoded WAV container bytes.
    pub audio: String,
    /// Word timing estimates, in input order.
    pub timestamps: Vec<WordTimestamp>,
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// One entry of the models listing.
#[derive(Debug, Serialize)]
pub struct ModelObject {
    pub id: &'static str,
    pub object: &'static str,
}

/// Response body for `GET /v1/models`.
#[derive(Debug, Serialize)]
pub struct ModelList {
    pub data: Vec<ModelObject>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Transport-level error: every synthesis pipeline failure surfaces as
/// HTTP 500 with the error's display text as the detail.
#[derive(Debug)]
pub struct ApiError(CaptionError);

impl ApiError {
    /// The detail string carried in the response body.
    pub fn detail(&self) -> String {
        self.0.to_string()
    }
}

impl From<CaptionError> for ApiError {
    fn from(err: CaptionError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = self.detail();
        warn!(error = %detail, "Synthesis request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { detail })).into_response()
    }
}
