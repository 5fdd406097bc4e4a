//! Training datasets: local JSONL staging and handles on remote files.

mod handle;
pub mod jsonl;


pub use handle::{Dataset, FILE_SIZE_WARNING};
pub use jsonl::{prepare, prepare_in, validate, PromptCompletion};
