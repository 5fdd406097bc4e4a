mod service;
mod types;
mod validation;


pub use service::{FileService, FileServiceImpl};
pub use types::{FileDeleteResponse, FileListResponse, FileObject, FilePurpose, FileUploadRequest};
pub use validation::{FileRequestValidator, MAX_TOTAL_STORAGE};
