use crate::errors::{OpenTrainError, OpenTrainResult, ValidationError};
use crate::services::completions::CompletionRequest;

pub struct CompletionRequestValidator;

impl CompletionRequestValidator {
    pub fn validate(request: &CompletionRequest) -> OpenTrainResult<()> {
        if request.model.is_empty() {
            return Err(OpenTrainError::Validation(
                ValidationError::MissingRequiredField("model".to_string()),
            ));
        }

        check_range("temperature", request.temperature, 0.0, 2.0)?;

        if let Some(top_p) = request.top_p {
            check_range("top_p", top_p, 0.0, 1.0)?;
        }
        if let Some(presence_penalty) = request.presence_penalty {
            check_range("presence_penalty", presence_penalty, -2.0, 2.0)?;
        }
        if let Some(frequency_penalty) = request.frequency_penalty {
            check_range("frequency_penalty", frequency_penalty, -2.0, 2.0)?;
        }

        if request.max_tokens == Some(0) {
            return Err(OpenTrainError::Validation(ValidationError::InvalidParameter {
                parameter: "max_tokens".to_string(),
                reason: "must be at least 1".to_string(),
            }));
        }

        Ok(())
    }
}

fn check_range(parameter: &str, value: f32, min: f32, max: f32) -> OpenTrainResult<()> {
    if (min..=max).contains(&value) {
        return Ok(());
    }
    Err(OpenTrainError::Validation(ValidationError::InvalidParameter {
        parameter: parameter.to_string(),
        reason: format!("{} is outside {}..={}", value, min, max),
    }))
}
