//! Repository configuration file support.
//!
//! This module provides utilities for reading repository configuration from
//! TOML configuration files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::factory::RepositoryType;
use super::repository::RepositoryError;
use super::RemoteConfig;

/// Repository configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySettings,
    #[serde(default)]
    pub remote: RemoteSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// Remote API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteSettings {
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            connect_timeout: default_connect_timeout(),
            request_timeout: default_request_timeout(),
        }
    }
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_request_timeout() -> u64 {
    30
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: RepositoryConfig = toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load repository configuration from the default location.
    ///
    /// Searches for `roster.toml` in the current directory and the parent
    /// directory.
    pub fn from_default_location() -> Result<Self, RepositoryError> {
        let search_paths = vec![
            PathBuf::from("roster.toml"),
            PathBuf::from("../roster.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(RepositoryError::configuration(
            "No roster.toml found in standard locations",
        ))
    }

    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, String> {
        RepositoryType::from_str(&self.repository.repo_type)
    }

    /// Convert to RemoteConfig if this is a remote configuration.
    #[cfg(feature = "remote-repo")]
    pub fn to_remote_config(&self) -> Result<Option<RemoteConfig>, RepositoryError> {
        let repo_type = self.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;

        if repo_type != RepositoryType::Remote {
            return Ok(None);
        }

        if self.remote.base_url.is_empty() {
            return Err(RepositoryError::configuration(
                "Remote repository requires 'remote.base_url' setting",
            ));
        }

        Ok(Some(RemoteConfig {
            base_url: self.remote.base_url.clone(),
            connect_timeout_sec: self.remote.connect_timeout,
            request_timeout_sec: self.remote.request_timeout,
        }))
    }

    /// Convert to RemoteConfig when the feature is disabled.
    #[cfg(not(feature = "remote-repo"))]
    pub fn to_remote_config(&self) -> Result<Option<RemoteConfig>, RepositoryError> {
        let repo_type = self.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;

        if repo_type == RepositoryType::Remote {
            return Err(RepositoryError::configuration(
                "Remote repository feature not enabled",
            ));
        }

        Ok(None)
    }
}
