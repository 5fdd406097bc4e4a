//! Test fixtures and sample data
//!
//! Sample API responses in the shape the service returns them, shared by the
//! unit tests of every layer.

mod file_fixtures;
mod fine_tune_fixtures;

pub use completion_fixtures::*;
pub use file_fixtures::*;
pub use fine_tune_fixtures::*;
