//! Configuration handling for the TUI

use crate::api::DEFAULT_BASE_URL;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the collection URL
pub const API_URL_ENV: &str = "USERS_API_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Users collection URL
    pub api_url: Option<String>,
    /// Log file path
    pub log_file: Option<PathBuf>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "users-tui", "users-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: TuiConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Collection URL: environment, then config file, then the default
    pub fn resolve_api_url(&self, env_value: Option<String>) -> Result<String> {
        let raw = env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let url = Url::parse(raw.trim()).with_context(|| format!("Invalid users API URL {raw:?}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("Users API URL must be http or https, got {raw:?}");
        }
        Ok(raw.trim().to_string())
    }

    /// Where log output goes: configured path, else the platform data dir
    pub fn resolve_log_file(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            Self::project_dirs().map(|dirs| dirs.data_local_dir().join("users-tui.log"))
        })
    }
}
