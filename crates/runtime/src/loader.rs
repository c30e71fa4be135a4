//! Lazy, one-time model initialization.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::info;

use caption_core::{CaptionResult, ModelConfig, SpeechModel};

use crate::mock::MockModel;

/// Creates the speech model on first use and caches the handle for the
/// process lifetime.
///
/// The load is guarded by a one-time-initialization cell, so concurrent
/// first requests converge on a single instance. A failed load leaves the
/// cell empty; the next call retries.
pub struct ModelLoader {
    config: ModelConfig,
    model: OnceCell<Arc<dyn SpeechModel>>,
}

impl ModelLoader {
    /// Create a loader for the given model configuration. No load happens
    /// until the first `get()`.
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            model: OnceCell::new(),
        }
    }

    /// Get the cached model handle, loading it on first call.
    pub async fn get(&self) -> CaptionResult<Arc<dyn SpeechModel>> {
        self.model
            .get_or_try_init(|| async {
                info!(model_id = %self.config.model_id, "Loading speech model");
                load_model(&self.config)
            })
            .await
            .cloned()
    }

    /// Whether the model has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.model.initialized()
    }

    /// Get the loader's model configuration.
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }
}

impl std::fmt::Debug for ModelLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelLoader")
            .field("model_id", &self.config.model_id)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

fn load_model(config: &ModelConfig) -> CaptionResult<Arc<dyn SpeechModel>> {
    let model = MockModel::new(config)?;
    info!(model_id = %config.model_id, "Speech model ready");
    Ok(Arc::new(model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use caption_core::CaptionError;

    #[tokio::test]
    async fn test_loader_lazy() {
        let loader = ModelLoader::new(ModelConfig::default());
        assert!(!loader.is_loaded());

        loader.get().await.unwrap();
        assert!(loader.is_loaded());
    }

    #[tokio::test]
    async fn test_loader_idempotent() {
        let loader = ModelLoader::new(ModelConfig::default());

        let first = loader.get().await.unwrap();
        let second = loader.get().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_loader_bad_default_voice() {
        let config = ModelConfig {
            default_voice: "no_such_voice".to_string(),
            ..Default::default()
        };
        let loader = ModelLoader::new(config);

        let err = match loader.get().await {
            Err(e) => e,
            Ok(_) => panic!("called `Result::unwrap_err()` on an `Ok` value"),
        };
        assert!(matches!(err, CaptionError::ModelLoad { .. }));
        assert!(!loader.is_loaded());
    }
}
