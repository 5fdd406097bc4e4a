use crate::errors::{ErrorMapper, OpenTrainError, OpenTrainResult};
use bytes::Bytes;
use reqwest::Response;
use serde::de::DeserializeOwned;

pub struct ResponseParser;

impl ResponseParser {
    pub async fn parse_response<T: DeserializeOwned>(response: Response) -> OpenTrainResult<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            Self::parse_json(&body)
        } else {
            Err(Self::error_from(response).await)
        }
    }

    pub async fn parse_bytes(response: Response) -> OpenTrainResult<Bytes> {
        if response.status().is_success() {
            Ok(response.bytes().await?)
        } else {
            Err(Self::error_from(response).await)
        }
    }

    /// Converts a non-success response into the matching error category
    pub async fn error_from(response: Response) -> OpenTrainError {
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let error_response = match response.bytes().await {
            Ok(body) => ErrorMapper::parse_error_response(&body),
            Err(_) => None,
        };

        tracing::debug!(status = status, "Request returned an error status");
        ErrorMapper::map_status_with_headers(status, &headers, error_response)
    }

    pub fn parse_json<T: DeserializeOwned>(data: &[u8]) -> OpenTrainResult<T> {
        serde_json::from_slice(data).map_err(|e| {
            OpenTrainError::Deserialization(format!(
                "Failed to deserialize JSON: {}. Data: {}",
                e,
                String::from_utf8_lossy(data)
            ))
        })
    }
}
