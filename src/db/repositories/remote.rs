//! HTTP-backed repository talking to the roster REST collaborator.
//!
//! Every response is decoded into the strongly-typed boundary models;
//! unexpected shapes become explicit validation errors instead of loosely
//! typed values leaking into the engine.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::api::ClientId;
use crate::db::models::{ClientRef, ClientVisitReport, DutyRecord, EmployeeRef};
use crate::db::repository::{
    ErrorContext, ReportingRepository, RepositoryError, RepositoryResult, RosterRepository,
};
use crate::models::calendar::DateRange;
use crate::routes::availability::PeriodSummary;

/// Connection settings for the remote collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the REST API, e.g. `http://localhost:8000`.
    pub base_url: String,
    pub connect_timeout_sec: u64,
    pub request_timeout_sec: u64,
}

impl RemoteConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout_sec: 10,
            request_timeout_sec: 30,
        }
    }

    /// Read the configuration from environment variables.
    ///
    /// `ROSTER_API_URL` is required; `ROSTER_API_CONNECT_TIMEOUT` and
    /// `ROSTER_API_REQUEST_TIMEOUT` (seconds) are optional.
    pub fn from_env() -> Result<Self, RepositoryError> {
        let base_url = std::env::var("ROSTER_API_URL").map_err(|_| {
            RepositoryError::configuration(
                "Remote repository requires ROSTER_API_URL to be set",
            )
        })?;

        let mut config = Self::new(base_url);
        if let Some(secs) = env_u64("ROSTER_API_CONNECT_TIMEOUT") {
            config.connect_timeout_sec = secs;
        }
        if let Some(secs) = env_u64("ROSTER_API_REQUEST_TIMEOUT") {
            config.request_timeout_sec = secs;
        }
        Ok(config)
    }
}

fn env_u64(key: &str) -> Option<u64> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Repository backed by the roster REST API.
pub struct RemoteRepository {
    client: Client,
    base_url: Url,
}

impl RemoteRepository {
    pub fn new(config: &RemoteConfig) -> RepositoryResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            RepositoryError::configuration(format!(
                "Invalid base URL '{}': {}",
                config.base_url, e
            ))
        })?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_sec))
            .timeout(Duration::from_secs(config.request_timeout_sec))
            .build()
            .map_err(|e| {
                RepositoryError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client, base_url })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        operation: &str,
    ) -> RepositoryResult<T> {
        let url = self.base_url.join(path).map_err(|e| {
            RepositoryError::configuration(format!("Invalid endpoint path '{}': {}", path, e))
        })?;

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| RepositoryError::from(e).with_operation(operation))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RepositoryError::query_with_context(
                format!("unexpected status {}", status),
                ErrorContext::new(operation).with_details(format!("path={}", path)),
            ));
        }

        response.json::<T>().await.map_err(|e| {
            RepositoryError::validation_with_context(
                format!("response decode failed: {}", e),
                ErrorContext::new(operation).with_details(format!("path={}", path)),
            )
        })
    }
}

fn range_query(range: &DateRange) -> [(&'static str, String); 2] {
    [
        ("start_date", range.start.to_string()),
        ("end_date", range.end.to_string()),
    ]
}

#[async_trait]
impl RosterRepository for RemoteRepository {
    async fn fetch_employees(&self) -> RepositoryResult<Vec<EmployeeRef>> {
        self.get_json("/api/employees", &[], "fetch_employees").await
    }

    async fn fetch_clients(&self) -> RepositoryResult<Vec<ClientRef>> {
        self.get_json("/api/clients", &[], "fetch_clients").await
    }
}

#[async_trait]
impl ReportingRepository for RemoteRepository {
    async fn fetch_period_summary(&self, range: &DateRange) -> RepositoryResult<PeriodSummary> {
        self.get_json(
            "/api/availability/summary",
            &range_query(range),
            "fetch_period_summary",
        )
        .await
    }

    async fn fetch_unavailable_records(
        &self,
        range: &DateRange,
    ) -> RepositoryResult<Vec<DutyRecord>> {
        // The unavailable report endpoint uses bare start/end parameter names.
        let query = [
            ("start", range.start.to_string()),
            ("end", range.end.to_string()),
        ];
        self.get_json("/api/reports/unavailable", &query, "fetch_unavailable_records")
            .await
    }

    async fn fetch_client_visit_report(
        &self,
        client_id: &ClientId,
        range: &DateRange,
    ) -> RepositoryResult<ClientVisitReport> {
        let mut query = vec![("client_id", client_id.as_str().to_string())];
        query.extend(range_query(range));
        self.get_json(
            "/api/reports/client-visits",
            &query,
            "fetch_client_visit_report",
        )
        .await
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        let url = self.base_url.join("/api/health").map_err(|e| {
            RepositoryError::configuration(format!("Invalid health path: {}", e))
        })?;

        match self.client.get(url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(e) => Err(RepositoryError::from(e).with_operation("health_check")),
        }
    }
}
