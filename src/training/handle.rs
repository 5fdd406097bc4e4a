use crate::client::OpenTrainClient;
use crate::errors::OpenTrainResult;
use crate::services::fine_tunes::{FineTuneEvent, FineTuneJob};
use crate::transport::BoxStream;
use std::fmt;
use std::sync::Arc;

/// A submitted fine-tune job.
#[derive(Clone)]
pub struct FineTuneHandle {
    client: Arc<dyn OpenTrainClient>,
    id: String,
    organization: Option<String>,
}

impl FineTuneHandle {
    pub fn new(
        client: Arc<dyn OpenTrainClient>,
        id: impl Into<String>,
        organization: Option<String>,
    ) -> Self {
        Self {
            client,
            id: id.into(),
            organization,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Live progress events, in the order the service emits them. The stream
    /// ends when the service closes it; dropping it stops tracking.
    pub async fn track(&self) -> OpenTrainResult<BoxStream<FineTuneEvent>> {
        self.client
            .fine_tunes()
            .stream_events(&self.id, self.organization.as_deref())
            .await
    }

    pub async fn retrieve(&self) -> OpenTrainResult<FineTuneJob> {
        self.client
            .fine_tunes()
            .retrieve(&self.id, self.organization.as_deref())
            .await
    }

    /// Name of the produced model, once the job has one.
    pub async fn fine_tuned_model(&self) -> OpenTrainResult<Option<String>> {
        Ok(self.retrieve().await?.fine_tuned_model)
    }
}

impl fmt::Debug for FineTuneHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FineTuneHandle")
            .field("id", &self.id)
            .field("organization", &self.organization)
            .finish()
    }
}
