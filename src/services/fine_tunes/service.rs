use crate::auth::AuthManager;
use crate::errors::OpenTrainResult;
use crate::services::fine_tunes::*;
use crate::services::{decode, request_headers};
use crate::transport::{BoxStream, HttpTransport};
use async_trait::async_trait;
use futures::StreamExt;
use http::Method;
use std::sync::Arc;
use tracing::instrument;

#[async_trait]
pub trait FineTuneService: Send + Sync {
    async fn create(
        &self,
        request: FineTuneRequest,
        organization: Option<&str>,
    ) -> OpenTrainResult<FineTuneJob>;
    async fn list(&self, organization: Option<&str>) -> OpenTrainResult<FineTuneListResponse>;
    async fn retrieve(&self, fine_tune_id: &str, organization: Option<&str>)
        -> OpenTrainResult<FineTuneJob>;
    async fn events(
        &self,
        fine_tune_id: &str,
        organization: Option<&str>,
    ) -> OpenTrainResult<FineTuneEventListResponse>;
    async fn stream_events(
        &self,
        fine_tune_id: &str,
        organization: Option<&str>,
    ) -> OpenTrainResult<BoxStream<FineTuneEvent>>;
}

pub struct FineTuneServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
}

impl FineTuneServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>, auth_manager: Arc<dyn AuthManager>) -> Self {
        Self {
            transport,
            auth_manager,
        }
    }
}

#[async_trait]
impl FineTuneService for FineTuneServiceImpl {
    #[instrument(skip(self, request), fields(model = %request.model, training_file = %request.training_file))]
    async fn create(
        &self,
        request: FineTuneRequest,
        organization: Option<&str>,
    ) -> OpenTrainResult<FineTuneJob> {
        FineTuneRequestValidator::validate(&request)?;

        let headers = request_headers(self.auth_manager.as_ref(), organization).await?;
        let body = serde_json::to_value(&request)?;

        let value = self
            .transport
            .request(Method::POST, "/fine-tunes", Some(body), headers)
            .await?;
        decode(value)
    }

    #[instrument(skip(self))]
    async fn list(&self, organization: Option<&str>) -> OpenTrainResult<FineTuneListResponse> {
        let headers = request_headers(self.auth_manager.as_ref(), organization).await?;

        let value = self
            .transport
            .request(Method::GET, "/fine-tunes", None, headers)
            .await?;
        decode(value)
    }

    #[instrument(skip(self))]
    async fn retrieve(
        &self,
        fine_tune_id: &str,
        organization: Option<&str>,
    ) -> OpenTrainResult<FineTuneJob> {
        let headers = request_headers(self.auth_manager.as_ref(), organization).await?;

        let path = format!("/fine-tunes/{}", fine_tune_id);
        let value = self
            .transport
            .request(Method::GET, &path, None, headers)
            .await?;
        decode(value)
    }

    #[instrument(skip(self))]
    async fn events(
        &self,
        fine_tune_id: &str,
        organization: Option<&str>,
    ) -> OpenTrainResult<FineTuneEventListResponse> {
        let headers = request_headers(self.auth_manager.as_ref(), organization).await?;

        let path = format!("/fine-tunes/{}/events", fine_tune_id);
        let value = self
            .transport
            .request(Method::GET, &path, None, headers)
            .await?;
        decode(value)
    }

    #[instrument(skip(self))]
    async fn stream_events(
        &self,
        fine_tune_id: &str,
        organization: Option<&str>,
    ) -> OpenTrainResult<BoxStream<FineTuneEvent>> {
        let headers = request_headers(self.auth_manager.as_ref(), organization).await?;

        let path = format!("/fine-tunes/{}/events?stream=true", fine_tune_id);
        let payloads = self.transport.request_stream(&path, headers).await?;

        let events = payloads.map(|item| item.and_then(decode::<FineTuneEvent>));
        Ok(Box::pin(events))
    }
}
