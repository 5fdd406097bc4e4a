use crate::auth::AuthManager;
use crate::errors::OpenTrainResult;
use crate::services::files::{
    FileDeleteResponse, FileListResponse, FileObject, FileRequestValidator, FileUploadRequest,
};
use crate::services::{decode, request_headers};
use crate::transport::HttpTransport;
use async_trait::async_trait;
use bytes::Bytes;
use http::Method;
use std::sync::Arc;
use tracing::instrument;

#[async_trait]
pub trait FileService: Send + Sync {
    async fn list(&self, organization: Option<&str>) -> OpenTrainResult<FileListResponse>;
    async fn upload(&self, request: FileUploadRequest) -> OpenTrainResult<FileObject>;
    async fn retrieve(&self, file_id: &str, organization: Option<&str>)
        -> OpenTrainResult<FileObject>;
    async fn delete(&self, file_id: &str, organization: Option<&str>)
        -> OpenTrainResult<FileDeleteResponse>;
    async fn content(&self, file_id: &str, organization: Option<&str>) -> OpenTrainResult<Bytes>;
}

pub struct FileServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
}

impl FileServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>, auth_manager: Arc<dyn AuthManager>) -> Self {
        Self {
            transport,
            auth_manager,
        }
    }
}

#[async_trait]
impl FileService for FileServiceImpl {
    #[instrument(skip(self))]
    async fn list(&self, organization: Option<&str>) -> OpenTrainResult<FileListResponse> {
        let headers = request_headers(self.auth_manager.as_ref(), organization).await?;

        let value = self
            .transport
            .request(Method::GET, "/files", None, headers)
            .await?;
        decode(value)
    }

    #[instrument(skip(self, request), fields(filename = %request.filename, bytes = request.file_data.len()))]
    async fn upload(&self, request: FileUploadRequest) -> OpenTrainResult<FileObject> {
        FileRequestValidator::validate(&request)?;

        let headers =
            request_headers(self.auth_manager.as_ref(), request.organization.as_deref()).await?;

        let value = self
            .transport
            .upload_file(
                "/files",
                request.file_data,
                &request.filename,
                request.purpose.as_str(),
                headers,
            )
            .await?;
        let file: FileObject = decode(value)?;

        tracing::info!(file_id = %file.id, "Uploaded file");
        Ok(file)
    }

    #[instrument(skip(self))]
    async fn retrieve(
        &self,
        file_id: &str,
        organization: Option<&str>,
    ) -> OpenTrainResult<FileObject> {
        let headers = request_headers(self.auth_manager.as_ref(), organization).await?;

        let path = format!("/files/{}", file_id);
        let value = self
            .transport
            .request(Method::GET, &path, None, headers)
            .await?;
        decode(value)
    }

    #[instrument(skip(self))]
    async fn delete(
        &self,
        file_id: &str,
        organization: Option<&str>,
    ) -> OpenTrainResult<FileDeleteResponse> {
        let headers = request_headers(self.auth_manager.as_ref(), organization).await?;

        let path = format!("/files/{}", file_id);
        let value = self
            .transport
            .request(Method::DELETE, &path, None, headers)
            .await?;
        decode(value)
    }

    #[instrument(skip(self))]
    async fn content(&self, file_id: &str, organization: Option<&str>) -> OpenTrainResult<Bytes> {
        let headers = request_headers(self.auth_manager.as_ref(), organization).await?;

        let path = format!("/files/{}/content", file_id);
        self.transport.download_file(&path, headers).await
    }
}
