use crate::client::OpenTrainClient;
use crate::errors::{ConfigurationError, OpenTrainError, OpenTrainResult};
use crate::inference::{CompletionOptions, Inference};
use std::sync::Arc;

/// Short completions against a model given by name or by the fine-tune
/// that produced it.
#[derive(Debug, Clone)]
pub struct Predictor {
    inference: Inference,
}

impl Predictor {
    /// Exactly one of `model` and `fine_tune_id` must be given.
    pub async fn new(
        client: Arc<dyn OpenTrainClient>,
        model: Option<&str>,
        fine_tune_id: Option<&str>,
    ) -> OpenTrainResult<Self> {
        let inference = match (model, fine_tune_id) {
            (Some(_), Some(_)) => {
                return Err(OpenTrainError::Configuration(
                    ConfigurationError::ConflictingModelSource,
                ))
            }
            (None, None) => {
                return Err(OpenTrainError::Configuration(
                    ConfigurationError::MissingModelSource,
                ))
            }
            (Some(model), None) => Inference::new(client, model),
            (None, Some(fine_tune_id)) => Inference::from_fine_tune_id(client, fine_tune_id).await?,
        };

        Ok(Self { inference })
    }

    pub fn model(&self) -> &str {
        self.inference.model()
    }

    pub async fn predict(&self, prompt: &str, max_tokens: u32) -> OpenTrainResult<String> {
        self.inference
            .call(prompt, CompletionOptions::default().with_max_tokens(max_tokens))
            .await
    }

    /// A single-token prediction, suited to classification prompts.
    pub async fn predict_one(&self, prompt: &str) -> OpenTrainResult<String> {
        self.predict(prompt, 1).await
    }
}
