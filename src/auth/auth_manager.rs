use crate::client::OpenTrainConfig;
use crate::errors::{AuthenticationError, ConfigurationError, OpenTrainError, OpenTrainResult};
use async_trait::async_trait;
use http::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

pub const ORGANIZATION_HEADER: &str = "OpenAI-Organization";

/// Trait for managing authentication in requests
#[async_trait]
pub trait AuthManager: Send + Sync {
    /// Applies authentication headers to the request
    async fn apply_auth(&self, headers: &mut HeaderMap) -> OpenTrainResult<()>;

    /// Validates the authentication configuration
    fn validate(&self) -> OpenTrainResult<()>;
}

/// Bearer-token authentication with an optional default organization.
pub struct ApiKeyAuthManager {
    api_key: SecretString,
    organization_id: Option<String>,
}

impl ApiKeyAuthManager {
    pub fn new(config: &OpenTrainConfig) -> Self {
        Self {
            api_key: SecretString::new(config.api_key().to_string()),
            organization_id: config.organization_id.clone(),
        }
    }

    pub fn with_organization_id(mut self, org_id: impl Into<String>) -> Self {
        self.organization_id = Some(org_id.into());
        self
    }
}

#[async_trait]
impl AuthManager for ApiKeyAuthManager {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> OpenTrainResult<()> {
        let auth_value = format!("Bearer {}", self.api_key.expose_secret());
        let mut auth_value = HeaderValue::from_str(&auth_value).map_err(|_| {
            OpenTrainError::Authentication(AuthenticationError::InvalidApiKey(
                "Failed to create Authorization header".to_string(),
            ))
        })?;
        auth_value.set_sensitive(true);
        headers.insert(http::header::AUTHORIZATION, auth_value);

        // a handle-level organization set by the caller wins over the default
        if let Some(org_id) = &self.organization_id {
            if !headers.contains_key(ORGANIZATION_HEADER) {
                apply_organization(headers, org_id)?;
            }
        }

        Ok(())
    }

    fn validate(&self) -> OpenTrainResult<()> {
        if self.api_key.expose_secret().is_empty() {
            return Err(OpenTrainError::Configuration(
                ConfigurationError::MissingApiKey("API key is empty".to_string()),
            ));
        }
        Ok(())
    }
}

/// Sets the organization header used to scope a request.
pub fn apply_organization(headers: &mut HeaderMap, org_id: &str) -> OpenTrainResult<()> {
    let value = HeaderValue::from_str(org_id).map_err(|_| {
        OpenTrainError::Authentication(AuthenticationError::InvalidOrganizationId(format!(
            "Invalid organization ID format: {}",
            org_id
        )))
    })?;
    headers.insert(ORGANIZATION_HEADER, value);
    Ok(())
}
