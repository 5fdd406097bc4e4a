pub mod auth;
pub mod client;
pub mod dataset;
pub mod errors;
pub mod inference;
pub mod observability;
pub mod services;
pub mod training;
pub mod transport;
pub mod utils;

#[cfg(test)]
pub mod mocks;
#[cfg(test)]
pub mod fixtures;

pub use client::{OpenTrainClient, OpenTrainClientBuilder, OpenTrainClientImpl, OpenTrainConfig};
pub use errors::{OpenTrainError, OpenTrainResult};

pub use dataset::{Dataset, PromptCompletion};
pub use inference::{CompletionOptions, Inference, Predictor};
pub use training::{BaseModel, DatasetReference, DatasetSource, FineTuneHandle, Trainer};
pub use utils::list_fine_tunes;

pub use services::{
    completions::{CompletionRequest, CompletionResponse, CompletionService},
    files::{FileDeleteResponse, FileListResponse, FileObject, FilePurpose, FileService},
    fine_tunes::{
        FineTuneEvent, FineTuneJob, FineTuneRequest, FineTuneService, FineTuneStatus,
        Hyperparameters,
    },
};

pub mod prelude {
    pub use crate::client::{OpenTrainClient, OpenTrainClientBuilder, OpenTrainConfig};
    pub use crate::dataset::{Dataset, PromptCompletion};
    pub use crate::errors::{OpenTrainError, OpenTrainResult};
    pub use crate::inference::{CompletionOptions, Inference, Predictor};
    pub use crate::services::fine_tunes::Hyperparameters;
    pub use crate::training::{DatasetReference, Trainer};
}
