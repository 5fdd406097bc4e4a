use crate::client::{OpenTrainClient, PAID_DOWNLOAD};
use crate::dataset::jsonl;
use crate::errors::{OpenTrainResult, UploadError};
use crate::services::files::{FileObject, FilePurpose, FileUploadRequest};
use bytes::Bytes;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::instrument;

/// Staged files above this size draw a warning; the service caps an
/// organization's total storage at 1 GiB.
pub const FILE_SIZE_WARNING: u64 = 500 * 1024 * 1024;

/// A file stored with the service, usable as training or evaluation input.
#[derive(Clone)]
pub struct Dataset {
    client: Arc<dyn OpenTrainClient>,
    file_id: String,
    organization: Option<String>,
    info: Arc<OnceCell<FileObject>>,
}

impl Dataset {
    /// Wraps a file that already exists remotely.
    pub fn new(
        client: Arc<dyn OpenTrainClient>,
        file_id: impl Into<String>,
        organization: Option<String>,
    ) -> Self {
        Self {
            client,
            file_id: file_id.into(),
            organization,
            info: Arc::new(OnceCell::new()),
        }
    }

    fn with_info(
        client: Arc<dyn OpenTrainClient>,
        file: FileObject,
        organization: Option<String>,
    ) -> Self {
        Self {
            client,
            file_id: file.id.clone(),
            organization,
            info: Arc::new(OnceCell::new_with(Some(file))),
        }
    }

    /// Uploads a local file for fine-tuning. The remote filename is `name`,
    /// or the file's own name when `name` is absent.
    #[instrument(skip(client), fields(path = %path.display()))]
    pub async fn from_path(
        client: Arc<dyn OpenTrainClient>,
        path: &Path,
        name: Option<&str>,
        organization: Option<String>,
    ) -> OpenTrainResult<Self> {
        let data = tokio::fs::read(path).await.map_err(|err| UploadError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

        let filename = match name {
            Some(name) => name.to_string(),
            None => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "dataset.jsonl".to_string()),
        };

        let request =
            FileUploadRequest::new(Bytes::from(data), filename.clone(), FilePurpose::FineTune)
                .with_organization(organization.clone());

        let file = client
            .files()
            .upload(request)
            .await
            .map_err(|err| UploadError::Rejected {
                filename,
                source: Box::new(err),
            })?;

        Ok(Self::new(client, file.id, organization))
    }

    /// Stages `records` as a JSONL file in the client's cache directory and uploads it.
    #[instrument(skip(client, records), fields(records = records.len()))]
    pub async fn from_records<T: Serialize>(
        client: Arc<dyn OpenTrainClient>,
        records: &[T],
        name: Option<&str>,
        organization: Option<String>,
    ) -> OpenTrainResult<Self> {
        let cache_dir = client.config().resolve_cache_dir()?;
        let path = jsonl::prepare_in(records, &cache_dir, name)?;

        let size = tokio::fs::metadata(&path)
            .await
            .map_err(|err| UploadError::Io {
                path: path.clone(),
                message: err.to_string(),
            })?
            .len();
        if size > FILE_SIZE_WARNING {
            tracing::warn!(
                path = %path.display(),
                bytes = size,
                "Dataset exceeds 500 MiB; the service caps total file storage at 1 GiB"
            );
        }

        Self::from_path(client, &path, None, organization).await
    }

    /// Every file visible to the caller, or to `organization` when given.
    #[instrument(skip(client))]
    pub async fn list_datasets(
        client: Arc<dyn OpenTrainClient>,
        organization: Option<String>,
    ) -> OpenTrainResult<Vec<Self>> {
        let files = client.files().list(organization.as_deref()).await?;

        Ok(files
            .data
            .into_iter()
            .map(|file| Self::with_info(client.clone(), file, organization.clone()))
            .collect())
    }

    pub fn id(&self) -> &str {
        &self.file_id
    }

    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    /// Remote metadata, fetched on first use and cached on the handle.
    pub async fn info(&self) -> OpenTrainResult<&FileObject> {
        self.info
            .get_or_try_init(|| async {
                self.client
                    .files()
                    .retrieve(&self.file_id, self.organization())
                    .await
            })
            .await
    }

    /// Raw file content.
    pub async fn download(&self) -> OpenTrainResult<Bytes> {
        self.client.advisories().warn_once(
            PAID_DOWNLOAD,
            "Downloading file content is only available to paid accounts",
        );
        self.client
            .files()
            .content(&self.file_id, self.organization())
            .await
    }

    /// Downloads the content and writes it to `path`.
    pub async fn to_file(&self, path: &Path) -> OpenTrainResult<()> {
        let content = self.download().await?;

        let io_error = |err: std::io::Error| UploadError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        };
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
        }
        tokio::fs::write(path, &content).await.map_err(io_error)?;
        Ok(())
    }

    /// Deletes the remote file.
    ///
    /// A conflict, rate limit or unavailable response means the service wants
    /// the call repeated; that is retried up to the configured attempt budget
    /// with a fixed delay. Returns `false` if the budget runs out or the
    /// service reports the file was not deleted. Other errors propagate.
    #[instrument(skip(self), fields(file_id = %self.file_id))]
    pub async fn delete(&self) -> OpenTrainResult<bool> {
        let policy = self.client.config().delete_retry;
        let attempts = policy.max_attempts.max(1);

        for attempt in 1..=attempts {
            match self
                .client
                .files()
                .delete(&self.file_id, self.organization())
                .await
            {
                Ok(response) => return Ok(response.deleted),
                Err(err) if err.is_try_again() => {
                    tracing::debug!(attempt, error = %err, "Delete deferred by service");
                    if attempt < attempts {
                        tokio::time::sleep(policy.delay).await;
                    }
                }
                Err(err) => return Err(err),
            }
        }

        tracing::warn!(attempts, "Gave up deleting file");
        Ok(false)
    }
}

impl fmt::Debug for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dataset")
            .field("file_id", &self.file_id)
            .field("organization", &self.organization)
            .field("info", &self.info.get())
            .finish()
    }
}
