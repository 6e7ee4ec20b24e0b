//! User settings for the roster
//!
//! Settings are optional: a missing `roster.json` means defaults, and every
//! field falls back to its default when absent from the file.

use serde::{Deserialize, Serialize};

use super::paths::RosterPaths;
use crate::error::RosterError;

/// User settings for the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Name of the employee data file, relative to the base directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Whether changes are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_data_file() -> String {
    "employees.txt".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            data_file: default_data_file(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &RosterPaths) -> Result<Self, RosterError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| RosterError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| RosterError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Check values that serde alone can't reject
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.data_file.trim().is_empty() {
            return Err(RosterError::Validation(
                "data file name cannot be empty".into(),
            ));
        }
        Ok(())
    }
}
