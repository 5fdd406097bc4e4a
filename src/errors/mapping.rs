use crate::errors::{
    AuthenticationError, OpenTrainError, RateLimitError, ServerError, ValidationError,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub code: Option<String>,
    pub param: Option<String>,
}

pub struct ErrorMapper;

impl ErrorMapper {
    /// Maps an HTTP status code and optional error body to an OpenTrainError
    pub fn map_status_code(
        status_code: u16,
        error_response: Option<ApiErrorResponse>,
    ) -> OpenTrainError {
        let error_detail = error_response.map(|r| r.error);
        let message = error_detail
            .as_ref()
            .map(|d| d.message.clone())
            .unwrap_or_else(|| format!("HTTP error: {}", status_code));
        let error_type = error_detail.as_ref().and_then(|d| d.error_type.clone());
        let error_code = error_detail.as_ref().and_then(|d| d.code.clone());

        match status_code {
            400 => OpenTrainError::Validation(ValidationError::InvalidRequest(message)),
            401 => {
                if message.contains("expired") {
                    OpenTrainError::Authentication(AuthenticationError::ExpiredApiKey(message))
                } else {
                    OpenTrainError::Authentication(AuthenticationError::InvalidApiKey(message))
                }
            }
            403 => {
                if message.contains("permission") {
                    OpenTrainError::Authentication(AuthenticationError::InsufficientPermissions(
                        message,
                    ))
                } else {
                    OpenTrainError::Authentication(AuthenticationError::Unauthorized(message))
                }
            }
            429 => OpenTrainError::RateLimit(RateLimitError::RateLimitExceeded { message }),
            500 => OpenTrainError::Server(ServerError::InternalError(message)),
            502 => OpenTrainError::Server(ServerError::BadGateway(message)),
            503 => OpenTrainError::Server(ServerError::ServiceUnavailable(message)),
            504 => OpenTrainError::Server(ServerError::GatewayTimeout(message)),
            _ => OpenTrainError::Request {
                status_code,
                message,
                error_type,
                error_code,
            },
        }
    }

    /// Maps a status code, attaching the retry-after hint for rate limits
    pub fn map_status_with_headers(
        status_code: u16,
        headers: &http::HeaderMap,
        error_response: Option<ApiErrorResponse>,
    ) -> OpenTrainError {
        let error = Self::map_status_code(status_code, error_response);

        match (error, Self::extract_retry_after(headers)) {
            (OpenTrainError::RateLimit(RateLimitError::RateLimitExceeded { message }), Some(secs)) => {
                OpenTrainError::RateLimit(RateLimitError::TooManyRequests {
                    message,
                    retry_after_secs: Some(secs),
                })
            }
            (error, _) => error,
        }
    }

    /// Extracts retry-after header value in seconds
    pub fn extract_retry_after(headers: &http::HeaderMap) -> Option<u64> {
        headers
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
    }

    pub fn parse_error_response(body: &[u8]) -> Option<ApiErrorResponse> {
        serde_json::from_slice(body).ok()
    }
}
