use crate::client::OpenTrainClient;
use crate::dataset::Dataset;
use crate::errors::{OpenTrainError, OpenTrainResult};
use crate::services::fine_tunes::{FineTuneEvent, FineTuneRequest, Hyperparameters};
use crate::training::{BaseModel, DatasetReference, FineTuneHandle};
use crate::transport::BoxStream;
use futures::StreamExt;
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

/// Submits fine-tunes of one base model and follows the latest submission.
pub struct Trainer {
    client: Arc<dyn OpenTrainClient>,
    model: BaseModel,
    organization: Option<String>,
    suffix: Option<String>,
    handle: Option<FineTuneHandle>,
}

impl Trainer {
    /// Fails with a configuration error unless `model` is an allowed base model.
    pub fn new(client: Arc<dyn OpenTrainClient>, model: &str) -> OpenTrainResult<Self> {
        let model = model.parse::<BaseModel>()?;
        Ok(Self {
            client,
            model,
            organization: None,
            suffix: None,
            handle: None,
        })
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    /// Appended by the service to the produced model's name.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn model(&self) -> BaseModel {
        self.model
    }

    /// The job submitted by the last successful `start`.
    pub fn handle(&self) -> Option<&FineTuneHandle> {
        self.handle.as_ref()
    }

    #[instrument(skip(self, reference, hyperparameters), fields(model = %self.model))]
    pub async fn start(
        &mut self,
        reference: impl Into<DatasetReference>,
        hyperparameters: Hyperparameters,
    ) -> OpenTrainResult<FineTuneHandle> {
        let files = reference.into().resolve()?;
        let organization = self.organization.clone().or(files.organization);

        let mut request = FineTuneRequest::new(files.training_file, self.model.as_str());
        request.validation_file = files.validation_file;
        request.hyperparameters = hyperparameters;
        request.suffix = self.suffix.clone();

        let job = self
            .client
            .fine_tunes()
            .create(request, organization.as_deref())
            .await?;

        tracing::info!(
            fine_tune_id = %job.id,
            "Fine-tune submitted; training can take minutes to hours, track it rather than waiting on it"
        );

        let handle = FineTuneHandle::new(self.client.clone(), job.id, organization);
        self.handle = Some(handle.clone());
        Ok(handle)
    }

    /// Progress events of the started job.
    pub async fn track(&self) -> OpenTrainResult<BoxStream<FineTuneEvent>> {
        match &self.handle {
            Some(handle) => handle.track().await,
            None => Err(OpenTrainError::State(
                "no fine-tune has been started".to_string(),
            )),
        }
    }

    /// Uploads `records`, starts a fine-tune on them, follows it to the end
    /// and returns the produced model name. `None` when the job did not
    /// succeed or the event feed closed before the job finished.
    #[instrument(skip(self, records, hyperparameters), fields(model = %self.model, records = records.len()))]
    pub async fn train<T: Serialize>(
        &mut self,
        records: &[T],
        hyperparameters: Hyperparameters,
    ) -> OpenTrainResult<Option<String>> {
        let dataset =
            Dataset::from_records(self.client.clone(), records, None, self.organization.clone())
                .await?;
        let handle = self.start(dataset, hyperparameters).await?;

        let mut events = handle.track().await?;
        while let Some(event) = events.next().await {
            let event = event?;
            tracing::info!(fine_tune_id = %handle.id(), level = %event.level, "{}", event.message);
        }

        let job = handle.retrieve().await?;
        if !job.status.is_terminal() {
            tracing::warn!(
                fine_tune_id = %handle.id(),
                status = ?job.status,
                "Event feed closed before the fine-tune finished; track the handle again to resume"
            );
            return Ok(None);
        }

        Ok(job.fine_tuned_model)
    }
}
