use std::collections::HashSet;
use std::sync::Mutex;

/// Advisory emitted when a completion is requested with a non-zero temperature.
pub const NONZERO_TEMPERATURE: &str = "nonzero-temperature";

/// Advisory emitted when file content is downloaded.
pub const PAID_DOWNLOAD: &str = "paid-download";

/// Non-fatal warnings that a client emits at most once each.
#[derive(Debug, Default)]
pub struct Advisories {
    emitted: Mutex<HashSet<&'static str>>,
}

impl Advisories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs `message` unless the advisory `key` was already emitted.
    /// Returns whether it was logged on this call.
    pub fn warn_once(&self, key: &'static str, message: &str) -> bool {
        let first = match self.emitted.lock() {
            Ok(mut emitted) => emitted.insert(key),
            Err(poisoned) => poisoned.into_inner().insert(key),
        };

        if first {
            tracing::warn!(advisory = key, "{}", message);
        }
        first
    }

    pub fn was_emitted(&self, key: &str) -> bool {
        match self.emitted.lock() {
            Ok(emitted) => emitted.contains(key),
            Err(poisoned) => poisoned.into_inner().contains(key),
        }
    }

    pub fn emitted_count(&self) -> usize {
        match self.emitted.lock() {
            Ok(emitted) => emitted.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }
}
