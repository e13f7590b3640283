//! Configuration handling for the TUI

use crate::contact::{DEFAULT_ENDPOINT, DEFAULT_SOURCE};
use crate::state::DEFAULT_SUBMIT_LABEL;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configured endpoint
pub const ENDPOINT_ENV: &str = "CONTACT_ENDPOINT";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactConfig {
    /// URL the form is posted to
    pub endpoint: Option<String>,
    /// Value of the `source` field in every submission
    pub source: Option<String>,
    /// Label of the submit control
    pub submit_label: Option<String>,
}

impl ContactConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "contact", "contact-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: ContactConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Endpoint to post to: environment, then file, then the built-in default
    pub fn endpoint(&self) -> String {
        self.endpoint_with_env(std::env::var(ENDPOINT_ENV).ok())
    }

    fn endpoint_with_env(&self, env: Option<String>) -> String {
        env.filter(|v| !v.trim().is_empty())
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    pub fn source(&self) -> &str {
        self.source.as_deref().unwrap_or(DEFAULT_SOURCE)
    }

    pub fn submit_label(&self) -> &str {
        self.submit_label.as_deref().unwrap_or(DEFAULT_SUBMIT_LABEL)
    }
}
