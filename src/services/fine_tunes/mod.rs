mod service;
mod types;
mod validation;


pub use service::{FineTuneService, FineTuneServiceImpl};
pub use types::{
    FineTuneEvent, FineTuneEventListResponse, FineTuneJob, FineTuneListResponse,
    FineTuneRequest, FineTuneStatus, Hyperparameters, JobHyperparams,
};
pub use validation::FineTuneRequestValidator;
