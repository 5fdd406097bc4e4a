//! Completions against base and fine-tuned models.

mod caller;
mod predictor;


pub use caller::{CompletionOptions, Inference};
pub use predictor::Predictor;
