//! Fine-tune submission and tracking.

mod handle;
mod model;
mod reference;
mod trainer;


pub use handle::FineTuneHandle;
pub use model::BaseModel;
pub use reference::{DatasetReference, DatasetSource, ResolvedFiles};
pub use trainer::Trainer;
