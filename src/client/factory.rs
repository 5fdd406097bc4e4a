use crate::auth::AuthManager;
use crate::client::{OpenTrainClient, OpenTrainClientImpl, OpenTrainConfig};
use crate::errors::{ConfigurationError, OpenTrainError, OpenTrainResult};
use crate::transport::HttpTransport;
use std::sync::Arc;

pub struct OpenTrainClientBuilder {
    config: Option<OpenTrainConfig>,
    transport: Option<Arc<dyn HttpTransport>>,
    auth_manager: Option<Arc<dyn AuthManager>>,
}

impl OpenTrainClientBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            transport: None,
            auth_manager: None,
        }
    }

    pub fn with_config(mut self, config: OpenTrainConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config = Some(OpenTrainConfig::new(api_key));
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_auth_manager(mut self, auth_manager: Arc<dyn AuthManager>) -> Self {
        self.auth_manager = Some(auth_manager);
        self
    }

    pub fn build(self) -> OpenTrainResult<Arc<dyn OpenTrainClient>> {
        let config = self.config.ok_or_else(|| {
            OpenTrainError::Configuration(ConfigurationError::MissingApiKey(
                "API key must be provided".to_string(),
            ))
        })?;
        config.validate()?;

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(crate::transport::ReqwestTransport::new(&config)?),
        };

        let auth_manager = self
            .auth_manager
            .unwrap_or_else(|| Arc::new(crate::auth::ApiKeyAuthManager::new(&config)));

        tracing::debug!(base_url = %config.base_url, "Built client");

        Ok(Arc::new(OpenTrainClientImpl::new(
            config,
            transport,
            auth_manager,
        )))
    }
}

impl Default for OpenTrainClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
