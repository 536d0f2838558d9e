//! Configuration handling for the TUI

use crate::state::{DEFAULT_FIRST_NAME, DEFAULT_LAST_NAME};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Platform directories for config and log files
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "nameform", "name-form-tui")
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Initial first name value
    pub first_name: Option<String>,
    /// Initial last name value
    pub last_name: Option<String>,
    /// Print accepted records as JSON after leaving the TUI
    pub print_on_exit: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_deref().unwrap_or(DEFAULT_FIRST_NAME)
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_deref().unwrap_or(DEFAULT_LAST_NAME)
    }

    pub fn print_on_exit(&self) -> bool {
        self.print_on_exit.unwrap_or(false)
    }
}
