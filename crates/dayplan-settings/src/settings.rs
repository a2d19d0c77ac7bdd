//! Persisted settings

use crate::error::SettingsError;
use crate::io::{atomic_write, read_json};
use dayplan_summarize::SummarizerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default summarizer limits when a caller gives none
    pub summarizer: SummarizerConfig,
}

impl Settings {
    /// Load settings, falling back to defaults when the file is missing
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        Ok(read_json(path)?.unwrap_or_default())
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        self.summarizer.validate()?;

        let json = serde_json::to_string_pretty(self).map_err(SettingsError::Encode)?;
        atomic_write(path, json.as_bytes()).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            path = %path.display(),
            max_sentences = self.summarizer.max_sentences,
            max_length = self.summarizer.max_length,
            "saved settings"
        );
        Ok(())
    }
}
