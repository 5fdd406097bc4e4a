use crate::errors::categories::{
    AuthenticationError, ConfigurationError, NetworkError, RateLimitError, ServerError,
    UploadError, ValidationError,
};
use thiserror::Error;

pub type OpenTrainResult<T> = Result<T, OpenTrainError>;

#[derive(Error, Debug)]
pub enum OpenTrainError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),

    #[error("Fine-tune {job_id} has not produced a model yet, try again in a few minutes")]
    NotReady { job_id: String },

    #[error("Invalid state: {0}")]
    State(String),

    #[error("Rate limit error: {0}")]
    RateLimit(#[from] RateLimitError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    #[error("Request error: {status_code} - {message}")]
    Request {
        status_code: u16,
        message: String,
        error_type: Option<String>,
        error_code: Option<String>,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Timeout error: operation timed out")]
    Timeout,

    #[error("Stream error: {0}")]
    Stream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl OpenTrainError {
    pub fn internal(message: impl Into<String>) -> Self {
        OpenTrainError::Internal(message.into())
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        OpenTrainError::Authentication(AuthenticationError::InvalidApiKey(message.into()))
    }

    /// Whether the remote service asked the caller to come back later.
    pub fn is_try_again(&self) -> bool {
        matches!(
            self,
            OpenTrainError::RateLimit(_)
                | OpenTrainError::Server(ServerError::ServiceUnavailable(_))
                | OpenTrainError::Request {
                    status_code: 409,
                    ..
                }
        )
    }

    pub fn is_authentication_error(&self) -> bool {
        matches!(self, OpenTrainError::Authentication(_))
    }

    pub fn error_code(&self) -> Option<&str> {
        match self {
            OpenTrainError::Request { error_code, .. } => error_code.as_deref(),
            _ => None,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            OpenTrainError::Request { status_code, .. } => Some(*status_code),
            OpenTrainError::Authentication(_) => Some(401),
            OpenTrainError::RateLimit(_) => Some(429),
            OpenTrainError::Server(ServerError::InternalError(_)) => Some(500),
            OpenTrainError::Server(ServerError::BadGateway(_)) => Some(502),
            OpenTrainError::Server(ServerError::ServiceUnavailable(_)) => Some(503),
            OpenTrainError::Server(ServerError::GatewayTimeout(_)) => Some(504),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for OpenTrainError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OpenTrainError::Timeout
        } else if err.is_connect() {
            OpenTrainError::Network(NetworkError::ConnectionFailed(err.to_string()))
        } else {
            OpenTrainError::Network(NetworkError::RequestFailed(err.to_string()))
        }
    }
}

impl From<serde_json::Error> for OpenTrainError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            OpenTrainError::Deserialization(err.to_string())
        } else {
            OpenTrainError::Serialization(err.to_string())
        }
    }
}

impl From<url::ParseError> for OpenTrainError {
    fn from(err: url::ParseError) -> Self {
        OpenTrainError::Configuration(ConfigurationError::InvalidBaseUrl(err.to_string()))
    }
}
