use crate::errors::{OpenTrainError, OpenTrainResult, ValidationError};
use crate::services::fine_tunes::FineTuneRequest;

const MAX_SUFFIX_LEN: usize = 40;

pub struct FineTuneRequestValidator;

impl FineTuneRequestValidator {
    pub fn validate(request: &FineTuneRequest) -> OpenTrainResult<()> {
        if request.training_file.trim().is_empty() {
            return Err(OpenTrainError::Validation(ValidationError::MissingTrainingFile));
        }

        if request.model.is_empty() {
            return Err(OpenTrainError::Validation(
                ValidationError::MissingRequiredField("model".to_string()),
            ));
        }

        let hp = &request.hyperparameters;
        if hp.n_epochs == Some(0) {
            return Err(invalid("n_epochs", "must be at least 1"));
        }
        if hp.batch_size == Some(0) {
            return Err(invalid("batch_size", "must be at least 1"));
        }
        if matches!(hp.learning_rate_multiplier, Some(m) if m <= 0.0) {
            return Err(invalid("learning_rate_multiplier", "must be positive"));
        }
        if matches!(hp.prompt_loss_weight, Some(w) if w < 0.0) {
            return Err(invalid("prompt_loss_weight", "cannot be negative"));
        }

        if let Some(suffix) = &request.suffix {
            if suffix.chars().count() > MAX_SUFFIX_LEN {
                return Err(invalid("suffix", "must be at most 40 characters"));
            }
        }

        Ok(())
    }
}

fn invalid(parameter: &str, reason: &str) -> OpenTrainError {
    OpenTrainError::Validation(ValidationError::InvalidParameter {
        parameter: parameter.to_string(),
        reason: reason.to_string(),
    })
}
