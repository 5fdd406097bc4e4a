use crate::errors::{ConfigurationError, OpenTrainError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Base models the fine-tunes endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseModel {
    Ada,
    Babbage,
    Curie,
    Davinci,
}

impl BaseModel {
    pub const ALL: [BaseModel; 4] = [
        BaseModel::Ada,
        BaseModel::Babbage,
        BaseModel::Curie,
        BaseModel::Davinci,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BaseModel::Ada => "ada",
            BaseModel::Babbage => "babbage",
            BaseModel::Curie => "curie",
            BaseModel::Davinci => "davinci",
        }
    }
}

impl fmt::Display for BaseModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BaseModel {
    type Err = OpenTrainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BaseModel::ALL
            .iter()
            .copied()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| {
                let allowed: Vec<&str> = BaseModel::ALL.iter().map(BaseModel::as_str).collect();
                OpenTrainError::Configuration(ConfigurationError::UnsupportedModel {
                    model: s.to_string(),
                    allowed: allowed.join(", "),
                })
            })
    }
}
