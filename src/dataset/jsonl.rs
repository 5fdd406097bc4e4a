//! Line-delimited JSON staging files.
//!
//! Training data travels to the service as one JSON object per line. Files
//! produced here are written in that shape and [`validate`] checks every line
//! against [`PromptCompletion`].

use crate::client::default_cache_dir;
use crate::errors::{OpenTrainResult, UploadError};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// One training example. Exactly these two keys, both strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptCompletion {
    pub prompt: String,
    pub completion: String,
}

impl PromptCompletion {
    pub fn new(prompt: impl Into<String>, completion: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            completion: completion.into(),
        }
    }
}

/// Writes `records` one per line to `output_path`, or to a fresh file in the
/// default cache directory when no path is given.
pub fn prepare<T: Serialize>(records: &[T], output_path: Option<&Path>) -> OpenTrainResult<PathBuf> {
    let path = match output_path {
        Some(path) => path.to_path_buf(),
        None => staging_path(&default_cache_dir()?, None),
    };
    write_lines(records, &path)?;
    Ok(path)
}

/// Writes `records` to `<dir>/<stem>.jsonl`, using a random stem when none is given.
pub fn prepare_in<T: Serialize>(
    records: &[T],
    dir: &Path,
    stem: Option<&str>,
) -> OpenTrainResult<PathBuf> {
    let path = staging_path(dir, stem);
    write_lines(records, &path)?;
    Ok(path)
}

/// True only when the file is non-empty and every line is a [`PromptCompletion`].
/// Unreadable files and malformed lines yield false.
pub fn validate(path: &Path) -> bool {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "Dataset unreadable");
            return false;
        }
    };

    let mut seen = 0usize;
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                tracing::debug!(line = index + 1, error = %err, "Dataset line unreadable");
                return false;
            }
        };
        if let Err(err) = serde_json::from_str::<PromptCompletion>(&line) {
            tracing::debug!(line = index + 1, error = %err, "Dataset line rejected");
            return false;
        }
        seen += 1;
    }

    seen > 0
}

fn staging_path(dir: &Path, stem: Option<&str>) -> PathBuf {
    let stem = match stem {
        Some(stem) => stem.to_string(),
        None => Uuid::new_v4().to_string(),
    };
    dir.join(format!("{}.jsonl", stem))
}

fn write_lines<T: Serialize>(records: &[T], path: &Path) -> OpenTrainResult<()> {
    let io_error = |err: std::io::Error| UploadError::Io {
        path: path.to_path_buf(),
        message: err.to_string(),
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n").map_err(io_error)?;
    }
    writer.flush().map_err(io_error)?;

    tracing::debug!(path = %path.display(), records = records.len(), "Prepared dataset");
    Ok(())
}
