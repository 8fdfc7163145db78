//! Configuration handling
//!
//! Store connection parameters and the default form variant are read from a
//! JSON file in the platform config directory (or an explicit path), then
//! overridden by `SIGNUP_STORE_URL` / `SIGNUP_STORE_KEY`.

use crate::state::FormVariant;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the store URL
pub const STORE_URL_ENV: &str = "SIGNUP_STORE_URL";
/// Environment variable overriding the store access key
pub const STORE_KEY_ENV: &str = "SIGNUP_STORE_KEY";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SignupConfig {
    /// Base URL of the hosted store
    pub store_url: Option<String>,
    /// Public access key for the hosted store
    pub store_key: Option<String>,
    /// Form shown when none is given on the command line
    pub variant: Option<FormVariant>,
}

impl SignupConfig {
    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location, falling back to
    /// defaults when no file exists
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Apply `SIGNUP_STORE_URL` / `SIGNUP_STORE_KEY` from the environment
    pub fn with_env(self) -> Self {
        self.with_overrides(
            std::env::var(STORE_URL_ENV).ok(),
            std::env::var(STORE_KEY_ENV).ok(),
        )
    }

    /// Replace store settings with any non-empty override
    pub fn with_overrides(mut self, url: Option<String>, key: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.store_url = Some(url);
        }
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.store_key = Some(key);
        }
        self
    }

    /// Store URL and key, both required to start
    pub fn store_credentials(&self) -> Result<(&str, &str)> {
        let url = self
            .store_url
            .as_deref()
            .ok_or_else(|| anyhow!("store URL not configured (set {STORE_URL_ENV} or store_url)"))?;
        let key = self
            .store_key
            .as_deref()
            .ok_or_else(|| anyhow!("store key not configured (set {STORE_KEY_ENV} or store_key)"))?;
        Ok((url, key))
    }
}
