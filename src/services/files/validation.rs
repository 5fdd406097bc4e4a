use crate::errors::{OpenTrainError, OpenTrainResult, ValidationError};
use crate::services::files::FileUploadRequest;

/// Total storage the service grants an organization.
pub const MAX_TOTAL_STORAGE: u64 = 1024 * 1024 * 1024;

pub struct FileRequestValidator;

impl FileRequestValidator {
    pub fn validate(request: &FileUploadRequest) -> OpenTrainResult<()> {
        if request.filename.is_empty() {
            return Err(OpenTrainError::Validation(
                ValidationError::MissingRequiredField("filename".to_string()),
            ));
        }

        if request.file_data.is_empty() {
            return Err(OpenTrainError::Validation(ValidationError::InvalidParameter {
                parameter: "file".to_string(),
                reason: "file cannot be empty".to_string(),
            }));
        }

        let file_size = request.file_data.len() as u64;
        if file_size > MAX_TOTAL_STORAGE {
            return Err(OpenTrainError::Validation(ValidationError::FileTooLarge {
                max_size: MAX_TOTAL_STORAGE,
                actual_size: file_size,
            }));
        }

        Ok(())
    }
}
