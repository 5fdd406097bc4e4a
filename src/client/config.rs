use crate::errors::{ConfigurationError, OpenTrainError, OpenTrainResult};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// How `Dataset::delete` reacts when the service answers "try again".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    /// Fixed pause between attempts.
    pub delay: Duration,
}

impl Default for DeleteRetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenTrainConfig {
    #[serde(skip_serializing)]
    pub api_key: Secret<String>,

    #[serde(default = "default_base_url")]
    pub base_url: Url,

    #[serde(default)]
    pub organization_id: Option<String>,

    #[serde(default = "default_timeout")]
    pub timeout: Duration,

    #[serde(default)]
    pub cache_dir: Option<PathBuf>,

    #[serde(default)]
    pub delete_retry: DeleteRetryPolicy,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl OpenTrainConfig {
    /// Creates a new OpenTrainConfig with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: default_base_url(),
            organization_id: None,
            timeout: default_timeout(),
            cache_dir: None,
            delete_retry: DeleteRetryPolicy::default(),
            user_agent: default_user_agent(),
        }
    }

    /// Creates a new OpenTrainConfig from environment variables
    ///
    /// Reads the following environment variables:
    /// - OPENAI_API_KEY (required)
    /// - OPENAI_BASE_URL (optional, defaults to https://api.openai.com/v1)
    /// - OPENAI_ORGANIZATION_ID (optional)
    /// - OPENTRAIN_CACHE_DIR (optional, defaults to ~/.cache/opentrain)
    pub fn from_env() -> OpenTrainResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            OpenTrainError::Configuration(ConfigurationError::MissingApiKey(
                "OPENAI_API_KEY environment variable not found".to_string(),
            ))
        })?;

        let mut config = Self::new(api_key);

        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            let url = Url::parse(&base_url).map_err(|e| {
                OpenTrainError::Configuration(ConfigurationError::InvalidBaseUrl(format!(
                    "Invalid OPENAI_BASE_URL: {}",
                    e
                )))
            })?;
            config.base_url = url;
        }

        if let Ok(org_id) = std::env::var("OPENAI_ORGANIZATION_ID") {
            config.organization_id = Some(org_id);
        }

        if let Ok(cache_dir) = std::env::var("OPENTRAIN_CACHE_DIR") {
            config.cache_dir = Some(PathBuf::from(cache_dir));
        }

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> OpenTrainResult<()> {
        let api_key = self.api_key.expose_secret();

        if api_key.is_empty() {
            return Err(OpenTrainError::Configuration(
                ConfigurationError::MissingApiKey("API key is empty".to_string()),
            ));
        }

        if api_key.len() < 10 {
            return Err(OpenTrainError::Configuration(
                ConfigurationError::InvalidApiKeyFormat("API key is too short".to_string()),
            ));
        }

        if self.timeout.is_zero() {
            return Err(OpenTrainError::Configuration(
                ConfigurationError::InvalidTimeout("Timeout must be greater than 0".to_string()),
            ));
        }

        Ok(())
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_organization_id(mut self, org_id: impl Into<String>) -> Self {
        self.organization_id = Some(org_id.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(cache_dir.into());
        self
    }

    pub fn with_delete_retry(mut self, policy: DeleteRetryPolicy) -> Self {
        self.delete_retry = policy;
        self
    }

    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Directory where staged JSONL files are written.
    pub fn resolve_cache_dir(&self) -> OpenTrainResult<PathBuf> {
        match &self.cache_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_cache_dir(),
        }
    }
}

/// `~/.cache/opentrain`
pub fn default_cache_dir() -> OpenTrainResult<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".cache").join("opentrain"))
        .ok_or_else(|| {
            OpenTrainError::Configuration(ConfigurationError::MissingCacheDir(
                "home directory is not set".to_string(),
            ))
        })
}

fn default_base_url() -> Url {
    Url::parse("https://api.openai.com/v1").expect("static base URL is valid")
}

fn default_timeout() -> Duration {
    Duration::from_secs(60)
}

fn default_user_agent() -> String {
    format!("opentrain/{}", env!("CARGO_PKG_VERSION"))
}
