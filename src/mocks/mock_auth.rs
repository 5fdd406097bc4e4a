//! Mock authentication manager for testing

use crate::errors::{OpenTrainError, OpenTrainResult};
use crate::auth::AuthManager;
use async_trait::async_trait;
use http::HeaderMap;

#[derive(Clone, Default)]
pub struct MockAuthManager {
    error: Option<String>,
}

impl MockAuthManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `apply_auth` call fail with an authentication error
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }
}

#[async_trait]
impl AuthManager for MockAuthManager {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> OpenTrainResult<()> {
        if let Some(message) = &self.error {
            return Err(OpenTrainError::authentication(message.clone()));
        }
        headers.insert(
            http::header::AUTHORIZATION,
            http::HeaderValue::from_static("Bearer sk-test-key-123"),
        );
        Ok(())
    }

    fn validate(&self) -> OpenTrainResult<()> {
        Ok(())
    }
}
