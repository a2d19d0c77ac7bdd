//! Path resolution for planner data files

use crate::error::SettingsError;
use std::path::PathBuf;

/// Overrides the data directory when set
pub const HOME_ENV: &str = "DAYPLAN_HOME";

/// Resolves standard paths for planner data
#[derive(Debug, Clone)]
pub struct Paths {
    pub data_dir: PathBuf,
}

impl Paths {
    /// `$DAYPLAN_HOME`, falling back to `~/.dayplan`
    pub fn new() -> Result<Self, SettingsError> {
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::at(dir));
        }

        let home = dirs::home_dir().ok_or(SettingsError::NoHome)?;
        Ok(Self::at(home.join(".dayplan")))
    }

    pub fn at(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Get settings.json path
    pub fn settings_file(&self) -> PathBuf {
        self.data_dir.join("settings.json")
    }
}
