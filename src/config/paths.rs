//! Path management for the roster
//!
//! Everything lives under one base directory, which defaults to the working
//! directory so that the data file is the plain relative name `employees.txt`.
//!
//! ## Path Resolution Order
//!
//! 1. `ROSTER_DIR` environment variable (if set)
//! 2. The current working directory

use std::path::PathBuf;

use super::settings::Settings;
use crate::error::RosterError;

/// Manages all paths used by the roster
#[derive(Debug, Clone)]
pub struct RosterPaths {
    /// Base directory for the data file, settings and audit log
    base_dir: PathBuf,
    /// Explicit data file that takes precedence over the settings
    data_file_override: Option<PathBuf>,
}

impl RosterPaths {
    /// Create a new RosterPaths instance
    ///
    /// Uses `ROSTER_DIR` when set, otherwise paths stay relative to the
    /// working directory.
    pub fn new() -> Self {
        let base_dir = std::env::var("ROSTER_DIR")
            .map(PathBuf::from)
            .unwrap_or_default();

        Self::with_base_dir(base_dir)
    }

    /// Create RosterPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            data_file_override: None,
        }
    }

    /// Pin the data file to an explicit path, ignoring the settings
    pub fn with_data_file(mut self, path: PathBuf) -> Self {
        self.data_file_override = Some(path);
        self
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("roster.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("roster-audit.log")
    }

    /// Get the path to the employee data file
    pub fn data_file(&self, settings: &Settings) -> PathBuf {
        match &self.data_file_override {
            Some(path) => path.clone(),
            None => self.base_dir.join(&settings.data_file),
        }
    }

    /// Ensure the base directory exists
    ///
    /// The working directory always exists, so an empty base is left alone.
    pub fn ensure_directories(&self) -> Result<(), RosterError> {
        if self.base_dir.as_os_str().is_empty() {
            return Ok(());
        }

        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RosterError::Io(format!("Failed to create base directory: {}", e)))
    }
}

impl Default for RosterPaths {
    fn default() -> Self {
        Self::new()
    }
}
