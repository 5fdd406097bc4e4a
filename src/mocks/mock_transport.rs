//! Mock HTTP transport for testing

use crate::errors::{OpenTrainError, OpenTrainResult};
use crate::transport::{BoxStream, HttpTransport};
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream;
use http::{HeaderMap, Method};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock HTTP transport that replays queued responses and records every request
#[derive(Clone)]
pub struct MockHttpTransport {
    inner: Arc<Mutex<MockHttpTransportInner>>,
}

struct MockHttpTransportInner {
    responses: VecDeque<OpenTrainResult<Value>>,
    stream_responses: VecDeque<OpenTrainResult<Vec<OpenTrainResult<Value>>>>,
    file_upload_responses: VecDeque<OpenTrainResult<Value>>,
    file_download_responses: VecDeque<OpenTrainResult<Bytes>>,
    requests: Vec<MockRequest>,
}

#[derive(Debug, Clone)]
pub struct MockRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub headers: HeaderMap,
}

impl MockHttpTransport {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockHttpTransportInner {
                responses: VecDeque::new(),
                stream_responses: VecDeque::new(),
                file_upload_responses: VecDeque::new(),
                file_download_responses: VecDeque::new(),
                requests: Vec::new(),
            })),
        }
    }

    /// Add a successful JSON response
    pub fn with_json_response(self, response: Value) -> Self {
        self.inner.lock().unwrap().responses.push_back(Ok(response));
        self
    }

    /// Add an error response
    pub fn with_error_response(self, error: OpenTrainError) -> Self {
        self.inner.lock().unwrap().responses.push_back(Err(error));
        self
    }

    /// Add an event stream made of the given payloads
    pub fn with_stream_response(self, items: Vec<Value>) -> Self {
        self.inner
            .lock()
            .unwrap()
            .stream_responses
            .push_back(Ok(items.into_iter().map(Ok).collect()));
        self
    }

    /// Add an event stream that fails to open
    pub fn with_stream_error(self, error: OpenTrainError) -> Self {
        self.inner
            .lock()
            .unwrap()
            .stream_responses
            .push_back(Err(error));
        self
    }

    pub fn with_file_upload_response(self, response: OpenTrainResult<Value>) -> Self {
        self.inner
            .lock()
            .unwrap()
            .file_upload_responses
            .push_back(response);
        self
    }

    pub fn with_file_download_response(self, response: OpenTrainResult<Bytes>) -> Self {
        self.inner
            .lock()
            .unwrap()
            .file_download_responses
            .push_back(response);
        self
    }

    /// Get the list of requests made
    pub fn requests(&self) -> Vec<MockRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    /// Body of the most recent request, if it had one
    pub fn last_body(&self) -> Option<Value> {
        self.inner
            .lock()
            .unwrap()
            .requests
            .last()
            .and_then(|r| r.body.clone())
    }

    /// Verify that a request was made with the given method and path
    pub fn verify_request(&self, method: Method, path: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .requests
            .iter()
            .any(|r| r.method == method && r.path == path)
    }

    /// Get the number of requests made
    pub fn request_count(&self) -> usize {
        self.inner.lock().unwrap().requests.len()
    }

    fn record(&self, method: Method, path: &str, body: Option<Value>, headers: HeaderMap) {
        self.inner.lock().unwrap().requests.push(MockRequest {
            method,
            path: path.to_string(),
            body,
            headers,
        });
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        headers: HeaderMap,
    ) -> OpenTrainResult<Value> {
        self.record(method, path, body, headers);

        self.inner
            .lock()
            .unwrap()
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(OpenTrainError::internal("No mock response configured")))
    }

    async fn request_stream(
        &self,
        path: &str,
        headers: HeaderMap,
    ) -> OpenTrainResult<BoxStream<Value>> {
        self.record(Method::GET, path, None, headers);

        let items = self
            .inner
            .lock()
            .unwrap()
            .stream_responses
            .pop_front()
            .unwrap_or_else(|| {
                Err(OpenTrainError::internal(
                    "No mock stream response configured",
                ))
            })?;
        Ok(Box::pin(stream::iter(items)))
    }

    async fn upload_file(
        &self,
        path: &str,
        file_data: Bytes,
        file_name: &str,
        purpose: &str,
        headers: HeaderMap,
    ) -> OpenTrainResult<Value> {
        let body = serde_json::json!({
            "filename": file_name,
            "purpose": purpose,
            "content": String::from_utf8_lossy(&file_data),
        });
        self.record(Method::POST, path, Some(body), headers);

        self.inner
            .lock()
            .unwrap()
            .file_upload_responses
            .pop_front()
            .unwrap_or_else(|| {
                Err(OpenTrainError::internal(
                    "No mock file upload response configured",
                ))
            })
    }

    async fn download_file(&self, path: &str, headers: HeaderMap) -> OpenTrainResult<Bytes> {
        self.record(Method::GET, path, None, headers);

        self.inner
            .lock()
            .unwrap()
            .file_download_responses
            .pop_front()
            .unwrap_or_else(|| {
                Err(OpenTrainError::internal(
                    "No mock file download response configured",
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transport_json_response() {
        let mock = MockHttpTransport::new()
            .with_json_response(serde_json::json!({"id": "test-123", "object": "test"}));

        let response = mock
            .request(
                Method::POST,
                "/test",
                Some(serde_json::json!({"input": "test"})),
                HeaderMap::new(),
            )
            .await
            .unwrap();

        assert_eq!(response["id"], "test-123");
        assert!(mock.verify_request(Method::POST, "/test"));
        assert_eq!(mock.last_body().unwrap()["input"], "test");
    }

    #[tokio::test]
    async fn test_mock_transport_error_response() {
        let mock = MockHttpTransport::new()
            .with_error_response(OpenTrainError::authentication("Invalid API key"));

        let result = mock
            .request(Method::GET, "/test", None, HeaderMap::new())
            .await;

        assert!(result.is_err());
        assert_eq!(mock.request_count(), 1);
    }
}
