use crate::services::files::FileObject;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FineTuneStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl FineTuneStatus {
    /// The service emits no further events once a job is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            FineTuneStatus::Succeeded | FineTuneStatus::Failed | FineTuneStatus::Cancelled
        )
    }
}

/// Training knobs sent alongside a fine-tune request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hyperparameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_epochs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_rate_multiplier: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_loss_weight: Option<f64>,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            n_epochs: Some(10),
            batch_size: Some(32),
            learning_rate_multiplier: None,
            prompt_loss_weight: None,
        }
    }
}

impl Hyperparameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_epochs(mut self, n_epochs: u32) -> Self {
        self.n_epochs = Some(n_epochs);
        self
    }

    pub fn with_batch_size(mut self, batch_size: u32) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    pub fn with_learning_rate_multiplier(mut self, multiplier: f64) -> Self {
        self.learning_rate_multiplier = Some(multiplier);
        self
    }

    pub fn with_prompt_loss_weight(mut self, weight: f64) -> Self {
        self.prompt_loss_weight = Some(weight);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FineTuneRequest {
    pub training_file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_file: Option<String>,
    pub model: String,
    #[serde(flatten)]
    pub hyperparameters: Hyperparameters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl FineTuneRequest {
    pub fn new(training_file: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            training_file: training_file.into(),
            validation_file: None,
            model: model.into(),
            hyperparameters: Hyperparameters::default(),
            suffix: None,
        }
    }
}

/// Hyperparameters as the service reports them back.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JobHyperparams {
    pub n_epochs: Option<u32>,
    pub batch_size: Option<u32>,
    pub learning_rate_multiplier: Option<f64>,
    pub prompt_loss_weight: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FineTuneJob {
    pub id: String,
    pub object: String,
    pub model: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub status: FineTuneStatus,
    pub fine_tuned_model: Option<String>,
    pub organization_id: Option<String>,
    #[serde(default)]
    pub hyperparams: JobHyperparams,
    #[serde(default)]
    pub training_files: Vec<FileObject>,
    #[serde(default)]
    pub validation_files: Vec<FileObject>,
    #[serde(default)]
    pub result_files: Vec<FileObject>,
    #[serde(default)]
    pub events: Vec<FineTuneEvent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FineTuneListResponse {
    pub object: String,
    pub data: Vec<FineTuneJob>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FineTuneEvent {
    pub object: String,
    pub created_at: i64,
    pub level: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FineTuneEventListResponse {
    pub object: String,
    pub data: Vec<FineTuneEvent>,
}
