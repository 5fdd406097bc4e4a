use crate::auth::AuthManager;
use crate::client::{Advisories, OpenTrainClient, OpenTrainConfig};
use crate::errors::OpenTrainResult;
use crate::services::{
    completions::{CompletionService, CompletionServiceImpl},
    files::{FileService, FileServiceImpl},
    fine_tunes::{FineTuneService, FineTuneServiceImpl},
};
use crate::transport::HttpTransport;
use async_trait::async_trait;
use std::sync::Arc;

pub struct OpenTrainClientImpl {
    config: OpenTrainConfig,
    advisories: Advisories,

    files_service: FileServiceImpl,
    fine_tunes_service: FineTuneServiceImpl,
    completions_service: CompletionServiceImpl,
}

impl OpenTrainClientImpl {
    pub fn new(
        config: OpenTrainConfig,
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
    ) -> Self {
        let files_service = FileServiceImpl::new(transport.clone(), auth_manager.clone());
        let fine_tunes_service = FineTuneServiceImpl::new(transport.clone(), auth_manager.clone());
        let completions_service = CompletionServiceImpl::new(transport, auth_manager);

        Self {
            config,
            advisories: Advisories::new(),
            files_service,
            fine_tunes_service,
            completions_service,
        }
    }
}

#[async_trait]
impl OpenTrainClient for OpenTrainClientImpl {
    fn files(&self) -> &dyn FileService {
        &self.files_service
    }

    fn fine_tunes(&self) -> &dyn FineTuneService {
        &self.fine_tunes_service
    }

    fn completions(&self) -> &dyn CompletionService {
        &self.completions_service
    }

    fn config(&self) -> &OpenTrainConfig {
        &self.config
    }

    fn advisories(&self) -> &Advisories {
        &self.advisories
    }

    async fn health_check(&self) -> OpenTrainResult<bool> {
        self.files_service.list(None).await.map(|_| true)
    }
}
