//! Repository factory for dependency injection.
//!
//! Centralizes creation of repository instances from runtime configuration,
//! so the rest of the crate only ever sees `Arc<dyn FullRepository>`.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::RepositoryConfig;
use super::repositories::LocalRepository;
#[cfg(feature = "remote-repo")]
use super::repositories::RemoteRepository;
use super::repository::{FullRepository, RepositoryError, RepositoryResult};
use super::RemoteConfig;

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// HTTP-backed repository talking to the roster REST API
    Remote,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "remote" | "http" => Ok(Self::Remote),
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from environment variables.
    ///
    /// Reads `REPOSITORY_TYPE`. When unset, defaults to Remote if a roster
    /// API URL is present, otherwise Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("REPOSITORY_TYPE") {
            return val.parse().unwrap_or(Self::Local);
        }

        if std::env::var("ROSTER_API_URL").is_ok() {
            Self::Remote
        } else {
            Self::Local
        }
    }
}

/// Factory for creating repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// `remote_config` is required for [`RepositoryType::Remote`].
    pub async fn create(
        repo_type: RepositoryType,
        remote_config: Option<&RemoteConfig>,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        match repo_type {
            RepositoryType::Remote => {
                #[cfg(feature = "remote-repo")]
                {
                    let config = remote_config.ok_or_else(|| {
                        RepositoryError::configuration(
                            "Remote repository requires a RemoteConfig",
                        )
                    })?;
                    let remote = Self::create_remote(config)?;
                    Ok(remote as Arc<dyn FullRepository>)
                }
                #[cfg(not(feature = "remote-repo"))]
                {
                    let _ = remote_config;
                    Err(RepositoryError::configuration(
                        "Remote repository feature not enabled",
                    ))
                }
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create an in-memory local repository.
    pub fn create_local() -> Arc<dyn FullRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create a remote repository from connection settings.
    #[cfg(feature = "remote-repo")]
    pub fn create_remote(config: &RemoteConfig) -> RepositoryResult<Arc<RemoteRepository>> {
        Ok(Arc::new(RemoteRepository::new(config)?))
    }

    /// Create a repository from a TOML configuration file.
    pub async fn from_config_file<P: AsRef<Path>>(
        path: P,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        let config = RepositoryConfig::from_file(path)?;
        let repo_type = config
            .repository_type()
            .map_err(RepositoryError::configuration)?;
        let remote_config = config.to_remote_config()?;
        Self::create(repo_type, remote_config.as_ref()).await
    }
}

/// Builder-style construction for call sites that assemble configuration
/// piecemeal.
#[derive(Default)]
pub struct RepositoryBuilder {
    repo_type: Option<RepositoryType>,
    remote_config: Option<RemoteConfig>,
}

impl RepositoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, repo_type: RepositoryType) -> Self {
        self.repo_type = Some(repo_type);
        self
    }

    pub fn with_remote_config(mut self, config: RemoteConfig) -> Self {
        self.remote_config = Some(config);
        self
    }

    pub async fn build(self) -> RepositoryResult<Arc<dyn FullRepository>> {
        let repo_type = self.repo_type.unwrap_or_else(RepositoryType::from_env);
        RepositoryFactory::create(repo_type, self.remote_config.as_ref()).await
    }
}

#[cfg(test)]
mod tests {
    use super::{RepositoryFactory, RepositoryType};
    use crate::db::repository::ReportingRepository;
    use std::str::FromStr;

    #[test]
    fn test_repository_type_from_str() {
        assert_eq!(
            RepositoryType::from_str("local").unwrap(),
            RepositoryType::Local
        );
        assert_eq!(
            RepositoryType::from_str("remote").unwrap(),
            RepositoryType::Remote
        );
        assert_eq!(
            RepositoryType::from_str("HTTP").unwrap(),
            RepositoryType::Remote
        );
        assert!(RepositoryType::from_str("postgres").is_err());
    }

    #[tokio::test]
    async fn test_create_local() {
        let repo = RepositoryFactory::create(RepositoryType::Local, None)
            .await
            .unwrap();
        assert!(repo.health_check().await.unwrap());
    }
}
