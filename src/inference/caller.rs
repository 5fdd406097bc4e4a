use crate::client::{OpenTrainClient, NONZERO_TEMPERATURE};
use crate::errors::{OpenTrainError, OpenTrainResult};
use crate::services::completions::{CompletionRequest, CompletionRequestValidator};
use std::fmt;
use std::sync::Arc;
use tracing::instrument;

/// Sampling options for a single completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOptions {
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    pub top_p: Option<f32>,
    pub stop: Option<Vec<String>>,
    pub presence_penalty: Option<f32>,
    pub frequency_penalty: Option<f32>,
    pub user: Option<String>,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            max_tokens: None,
            top_p: None,
            stop: None,
            presence_penalty: None,
            frequency_penalty: None,
            user: None,
        }
    }
}

impl CompletionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_stop(mut self, stop: Vec<String>) -> Self {
        self.stop = Some(stop);
        self
    }

    fn into_request(self, model: &str, prompt: &str) -> CompletionRequest {
        let mut request = CompletionRequest::new(model, prompt).with_temperature(self.temperature);
        request.max_tokens = self.max_tokens;
        request.top_p = self.top_p;
        request.stop = self.stop;
        request.presence_penalty = self.presence_penalty;
        request.frequency_penalty = self.frequency_penalty;
        request.user = self.user;
        request
    }
}

/// Runs completions against one model.
#[derive(Clone)]
pub struct Inference {
    client: Arc<dyn OpenTrainClient>,
    model: String,
}

impl Inference {
    pub fn new(client: Arc<dyn OpenTrainClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Targets the model produced by a fine-tune job. Fails with
    /// [`OpenTrainError::NotReady`] while the job has no model yet.
    #[instrument(skip(client))]
    pub async fn from_fine_tune_id(
        client: Arc<dyn OpenTrainClient>,
        fine_tune_id: &str,
    ) -> OpenTrainResult<Self> {
        let job = client.fine_tunes().retrieve(fine_tune_id, None).await?;

        match job.fine_tuned_model {
            Some(model) => Ok(Self::new(client, model)),
            None => Err(OpenTrainError::NotReady {
                job_id: fine_tune_id.to_string(),
            }),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Text of the first returned choice.
    #[instrument(skip(self, prompt, options), fields(model = %self.model))]
    pub async fn call(&self, prompt: &str, options: CompletionOptions) -> OpenTrainResult<String> {
        let request = options.into_request(&self.model, prompt);
        CompletionRequestValidator::validate(&request)?;

        if request.temperature != 0.0 {
            self.client.advisories().warn_once(
                NONZERO_TEMPERATURE,
                "Non-zero temperature makes completions non-deterministic",
            );
        }

        let response = self.client.completions().create(request).await?;

        response
            .first_text()
            .map(str::to_string)
            .ok_or_else(|| OpenTrainError::Deserialization("completion returned no choices".to_string()))
    }
}

impl fmt::Debug for Inference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inference").field("model", &self.model).finish()
    }
}
