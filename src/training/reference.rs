use crate::dataset::Dataset;
use crate::errors::{OpenTrainError, OpenTrainResult, ValidationError};

/// One side of a train/eval split.
#[derive(Debug, Clone)]
pub enum DatasetSource {
    FileId(String),
    Dataset(Dataset),
}

impl DatasetSource {
    fn file_id(&self) -> &str {
        match self {
            DatasetSource::FileId(id) => id,
            DatasetSource::Dataset(dataset) => dataset.id(),
        }
    }

    fn organization(&self) -> Option<&str> {
        match self {
            DatasetSource::FileId(_) => None,
            DatasetSource::Dataset(dataset) => dataset.organization(),
        }
    }
}

impl From<&str> for DatasetSource {
    fn from(id: &str) -> Self {
        DatasetSource::FileId(id.to_string())
    }
}

impl From<String> for DatasetSource {
    fn from(id: String) -> Self {
        DatasetSource::FileId(id)
    }
}

impl From<Dataset> for DatasetSource {
    fn from(dataset: Dataset) -> Self {
        DatasetSource::Dataset(dataset)
    }
}

/// What a fine-tune trains on: a file id, a dataset, or a train/eval split.
#[derive(Debug, Clone)]
pub enum DatasetReference {
    FileId(String),
    Dataset(Dataset),
    Split {
        train: Option<DatasetSource>,
        eval: Option<DatasetSource>,
    },
}

impl DatasetReference {
    pub fn split(train: impl Into<DatasetSource>, eval: Option<DatasetSource>) -> Self {
        DatasetReference::Split {
            train: Some(train.into()),
            eval,
        }
    }

    pub fn resolve(&self) -> OpenTrainResult<ResolvedFiles> {
        let (train, eval) = match self {
            DatasetReference::FileId(id) => (DatasetSource::FileId(id.clone()), None),
            DatasetReference::Dataset(dataset) => (DatasetSource::Dataset(dataset.clone()), None),
            DatasetReference::Split { train, eval } => match train {
                Some(train) => (train.clone(), eval.as_ref()),
                None => return Err(missing_training_file()),
            },
        };

        if train.file_id().trim().is_empty() {
            return Err(missing_training_file());
        }

        Ok(ResolvedFiles {
            training_file: train.file_id().to_string(),
            validation_file: eval.map(|source| source.file_id().to_string()),
            organization: train.organization().map(str::to_string),
        })
    }
}

fn missing_training_file() -> OpenTrainError {
    OpenTrainError::Validation(ValidationError::MissingTrainingFile)
}

impl From<&str> for DatasetReference {
    fn from(id: &str) -> Self {
        DatasetReference::FileId(id.to_string())
    }
}

impl From<String> for DatasetReference {
    fn from(id: String) -> Self {
        DatasetReference::FileId(id)
    }
}

impl From<Dataset> for DatasetReference {
    fn from(dataset: Dataset) -> Self {
        DatasetReference::Dataset(dataset)
    }
}

/// File ids a fine-tune request is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFiles {
    pub training_file: String,
    pub validation_file: Option<String>,
    /// Organization of the training dataset handle, if it had one.
    pub organization: Option<String>,
}
