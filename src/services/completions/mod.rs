mod service;
mod types;
mod validation;


pub use service::{CompletionService, CompletionServiceImpl};
pub use types::{CompletionChoice, CompletionRequest, CompletionResponse, Usage};
pub use validation::CompletionRequestValidator;
