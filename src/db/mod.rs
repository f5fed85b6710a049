//! Data-source module for the roster aggregation engine.
//!
//! This module provides abstractions for the read-only data operations via
//! the Repository pattern, allowing different backends to be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, display layer)            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - operation wrappers       │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────────┐
//!     │ Local (in-memory) │ Remote (HTTP)│
//!     └──────────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! ```ignore
//! use roster_rust::db::{factory::RepositoryFactory, services};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = RepositoryFactory::create_local();
//!     let clients = services::fetch_clients(repo.as_ref()).await?;
//!     Ok(())
//! }
//! ```

// Feature flag priority: remote > local.
// When multiple features are enabled (e.g., --all-features), remote takes precedence.
#[cfg(not(any(feature = "remote-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod models;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;

// Remote config is colocated with the repository implementation.
#[cfg(feature = "remote-repo")]
pub use repositories::remote::RemoteConfig;
#[cfg(not(feature = "remote-repo"))]
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    _private: (),
}

// ==================== Service Layer ====================
// High-level functions that work with any repository implementation.

pub use services::{
    employee_name_index, fetch_client_visit_report, fetch_clients, fetch_employees,
    fetch_period_summary, fetch_unavailable_records, health_check,
};

// ==================== Repository Pattern Exports ====================

pub use factory::{RepositoryBuilder, RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
pub use repositories::LocalRepository;
#[cfg(feature = "remote-repo")]
pub use repositories::RemoteRepository;
pub use repository::{
    ErrorContext, FullRepository, ReportingRepository, RepositoryError, RepositoryResult,
    RosterRepository,
};

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};
#[cfg(feature = "remote-repo")]
use tokio::runtime::Runtime;

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn FullRepository>> = OnceLock::new();

// Priority: remote > local (when --all-features is used)
#[cfg(feature = "remote-repo")]
async fn create_selected_repository() -> RepositoryResult<Arc<dyn FullRepository>> {
    let config = RemoteConfig::from_env()?;
    let repo = RepositoryFactory::create_remote(&config)?;
    Ok(repo as Arc<dyn FullRepository>)
}

#[cfg(all(feature = "local-repo", not(feature = "remote-repo")))]
fn create_selected_repository() -> RepositoryResult<Arc<dyn FullRepository>> {
    Ok(RepositoryFactory::create_local())
}

/// Initialize the global repository singleton for the selected backend.
#[cfg(feature = "remote-repo")]
pub fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let runtime = Runtime::new().context("Failed to create async runtime for repository init")?;
    let repo = runtime
        .block_on(create_selected_repository())
        .map_err(|e| anyhow::Error::msg(e.to_string()))?;
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Initialize the global repository singleton for the selected backend.
#[cfg(all(feature = "local-repo", not(feature = "remote-repo")))]
pub fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let repo = create_selected_repository()?;
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn FullRepository>> {
    if REPOSITORY.get().is_none() {
        let _ = init_repository();
    }

    REPOSITORY
        .get()
        .context("Repository not initialized. Call init_repository() first.")
}
