//! Request handlers for the captioned speech API.

use std::sync::Arc;

use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use tracing::{debug, info};

use caption_core::{
    AudioSegment, CaptionResult, Lang, ModelConfig, SpeechModel, SynthesisOptions,
};
use runtime::ModelLoader;
use word_timestamps::estimate_word_timestamps;

use crate::api::{
    ApiError, CaptionedSpeechRequest, CaptionedSpeechResponse, HealthResponse, ModelList,
    ModelObject,
};

/// Fixed language code passed to the model for every request.
const SYNTHESIS_LANG: Lang = Lang::En;

/// Model identifier advertised by the listing endpoint.
const SERVED_MODEL_ID: &str = "kokoro";

/// Shared request-handler state.
pub struct AppState {
    /// Lazily initialized model handle, shared by all requests after first
    /// load.
    pub loader: ModelLoader,
}

impl AppState {
    /// Create handler state for the given model configuration.
    pub fn new(model: ModelConfig) -> Self {
        Self {
            loader: ModelLoader::new(model),
        }
    }
}

/// `GET /health`.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// `GET /v1/models`.
pub async fn models() -> Json<ModelList> {
    Json(ModelList {
        data: vec![ModelObject {
            id: SERVED_MODEL_ID,
            object: "model",
        }],
    })
}

/// `POST /dev/captioned_speech`.
///
/// Synthesizes the request text and returns base64-encoded WAV audio plus
/// estimated word timestamps. Any pipeline failure maps to HTTP 500.
pub async fn captioned_speech(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CaptionedSpeechRequest>,
) -> Result<Json<CaptionedSpeechResponse>, ApiError> {
    let model = state.loader.get().await?;
    let response = synthesize_captioned(model.as_ref(), &req)?;
    Ok(Json(response))
}

/// Run the synthesis pipeline for one request.
pub fn synthesize_captioned(
    model: &dyn SpeechModel,
    req: &CaptionedSpeechRequest,
) -> CaptionResult<CaptionedSpeechResponse> {
    if req.model != SERVED_MODEL_ID {
        debug!(requested = %req.model, "model field is advisory, serving the loaded model");
    }
    if req.stream {
        debug!("streaming requested but unsupported, returning full audio");
    }
    if req.response_format != "wav" {
        debug!(requested = %req.response_format, "response format ignored, output is WAV");
    }

    let options = SynthesisOptions::new()
        .with_voice(req.voice.as_str())
        .with_speed(req.speed)
        .with_lang(SYNTHESIS_LANG);

    let segments: Vec<AudioSegment> = model
        .generate(&req.input, &options)?
        .collect::<CaptionResult<_>>()?;

    let buffer = audio_wav::concat_segments(&segments)?;
    let wav_bytes = audio_wav::encode_wav(&buffer)?;
    let total_duration = buffer.duration_secs();
    let timestamps = estimate_word_timestamps(&req.input, total_duration);

    info!(
        model = model.model_id(),
        text_len = req.input.len(),
        voice = %req.voice,
        segments = segments.len(),
        duration_secs = total_duration,
        words = timestamps.len(),
        "Synthesis completed"
    );

    Ok(CaptionedSpeechResponse {
        audio: BASE64.encode(&wav_bytes),
        timestamps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use caption_core::CaptionError;
    use runtime::MockModel;

    fn request(input: &str) -> CaptionedSpeechRequest {
        serde_json::from_value(serde_json::json!({ "input": input })).unwrap()
    }

    fn model() -> MockModel {
        MockModel::new(&ModelConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_health_shape() {
        let response = health().await;
        assert_eq!(
            serde_json::to_value(&response.0).unwrap(),
            serde_json::json!({"status": "ok"})
        );
    }

    #[tokio::test]
    async fn test_models_shape() {
        let response = models().await;
        assert_eq!(
            serde_json::to_value(&response.0).unwrap(),
            serde_json::json!({"data": [{"id": "kokoro", "object": "model"}]})
        );
    }

    #[test]
    fn test_synthesize_round_trip() {
        let response = synthesize_captioned(&model(), &request("hello world")).unwrap();

        let wav_bytes = BASE64.decode(&response.audio).unwrap();
        let (samples, rate) = audio_wav::decode_wav(&wav_bytes).unwrap();
        let duration = samples.len() as f64 / rate as f64;

        assert_eq!(response.timestamps.len(), 2);
        assert_eq!(response.timestamps[0].word, "hello");
        assert_eq!(response.timestamps[0].start_time, 0.0);
        assert_eq!(response.timestamps[1].word, "world");
        assert!((response.timestamps[1].end_time - duration).abs() <= 0.001);
    }

    #[test]
    fn test_synthesize_empty_input() {
        let err = synthesize_captioned(&model(), &request("")).unwrap_err();
        assert!(matches!(err, CaptionError::EmptyOutput));
        assert_eq!(err.to_string(), "No audio generated");
    }

    #[test]
    fn test_synthesize_multi_sentence() {
        let response =
            synthesize_captioned(&model(), &request("First sentence. Second one.")).unwrap();

        // One timestamp per whitespace word, regardless of segmentation.
        assert_eq!(response.timestamps.len(), 4);
        assert!(!response.audio.is_empty());
    }
}
