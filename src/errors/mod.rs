mod categories;
mod error;
mod mapping;

pub use categories::{
    AuthenticationError, ConfigurationError, NetworkError, RateLimitError, ServerError,
    UploadError, ValidationError,
};
pub use error::{OpenTrainError, OpenTrainResult};
pub use mapping::{ApiErrorDetail, ApiErrorResponse, ErrorMapper};
