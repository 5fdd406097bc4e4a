use crate::auth::AuthManager;
use crate::errors::OpenTrainResult;
use crate::services::completions::{
    CompletionRequest, CompletionRequestValidator, CompletionResponse,
};
use crate::services::{decode, request_headers};
use crate::transport::HttpTransport;
use async_trait::async_trait;
use http::Method;
use std::sync::Arc;
use tracing::instrument;

#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn create(&self, request: CompletionRequest) -> OpenTrainResult<CompletionResponse>;
}

pub struct CompletionServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
}

impl CompletionServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>, auth_manager: Arc<dyn AuthManager>) -> Self {
        Self {
            transport,
            auth_manager,
        }
    }
}

#[async_trait]
impl CompletionService for CompletionServiceImpl {
    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn create(&self, request: CompletionRequest) -> OpenTrainResult<CompletionResponse> {
        CompletionRequestValidator::validate(&request)?;

        let headers = request_headers(self.auth_manager.as_ref(), None).await?;
        let body = serde_json::to_value(&request)?;

        let value = self
            .transport
            .request(Method::POST, "/completions", Some(body), headers)
            .await?;
        decode(value)
    }
}
