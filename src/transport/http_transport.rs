use crate::client::OpenTrainConfig;
use crate::errors::{NetworkError, OpenTrainError, OpenTrainResult};
use crate::transport::{BoxStream, MultipartBuilder, ResponseParser, StreamHandler};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use url::Url;

/// Raw HTTP access to the API. Bodies cross this boundary as JSON values so the
/// trait stays usable as `Arc<dyn HttpTransport>`; services own the typing.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        headers: HeaderMap,
    ) -> OpenTrainResult<Value>;

    /// Opens a server-sent event stream; each item is one decoded `data:` payload.
    async fn request_stream(&self, path: &str, headers: HeaderMap)
        -> OpenTrainResult<BoxStream<Value>>;

    async fn upload_file(
        &self,
        path: &str,
        file_data: Bytes,
        file_name: &str,
        purpose: &str,
        headers: HeaderMap,
    ) -> OpenTrainResult<Value>;

    async fn download_file(&self, path: &str, headers: HeaderMap) -> OpenTrainResult<Bytes>;
}

/// HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
    // event feeds stay open for the life of a job, so only connecting is bounded
    stream_client: Client,
    base_url: Url,
}

impl ReqwestTransport {
    /// Creates a new ReqwestTransport from configuration
    pub fn new(config: &OpenTrainConfig) -> OpenTrainResult<Self> {
        let client = build_client(
            Client::builder()
                .timeout(config.timeout)
                .user_agent(&config.user_agent),
        )?;
        let stream_client = build_client(
            Client::builder()
                .connect_timeout(config.timeout)
                .user_agent(&config.user_agent),
        )?;

        Ok(Self {
            client,
            stream_client,
            base_url: config.base_url.clone(),
        })
    }

    /// Builds a full URL from a path
    fn build_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    fn builder(&self, method: Method, path: &str, headers: HeaderMap) -> OpenTrainResult<RequestBuilder> {
        let url = self.build_url(path);

        let request = match method {
            Method::GET => self.client.get(&url),
            Method::POST => self.client.post(&url),
            Method::DELETE => self.client.delete(&url),
            _ => {
                return Err(OpenTrainError::Network(NetworkError::RequestFailed(
                    format!("Unsupported HTTP method: {}", method),
                )))
            }
        };

        Ok(request.headers(headers))
    }
}

fn build_client(builder: reqwest::ClientBuilder) -> OpenTrainResult<Client> {
    builder.build().map_err(|e| {
        OpenTrainError::Network(NetworkError::ConnectionFailed(format!(
            "Failed to build HTTP client: {}",
            e
        )))
    })
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        headers: HeaderMap,
    ) -> OpenTrainResult<Value> {
        tracing::debug!(method = %method, path = path, "Outgoing request");

        let mut request = self.builder(method, path, headers)?;
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        ResponseParser::parse_response(response).await
    }

    async fn request_stream(
        &self,
        path: &str,
        headers: HeaderMap,
    ) -> OpenTrainResult<BoxStream<Value>> {
        tracing::debug!(path = path, "Opening event stream");

        let response = self
            .stream_client
            .get(self.build_url(path))
            .headers(headers)
            .header(http::header::ACCEPT, "text/event-stream")
            .send()
            .await?;
        StreamHandler::handle_stream(response).await
    }

    async fn upload_file(
        &self,
        path: &str,
        file_data: Bytes,
        file_name: &str,
        purpose: &str,
        headers: HeaderMap,
    ) -> OpenTrainResult<Value> {
        tracing::debug!(path = path, file_name = file_name, bytes = file_data.len(), "Uploading file");

        let multipart = MultipartBuilder::new()
            .add_text("purpose", purpose)
            .add_file("file", file_name, file_data)
            .build();

        let response = self
            .builder(Method::POST, path, headers)?
            .multipart(multipart)
            .send()
            .await?;
        ResponseParser::parse_response(response).await
    }

    async fn download_file(&self, path: &str, headers: HeaderMap) -> OpenTrainResult<Bytes> {
        tracing::debug!(path = path, "Downloading file");

        let response = self.builder(Method::GET, path, headers)?.send().await?;
        ResponseParser::parse_bytes(response).await
    }
}
