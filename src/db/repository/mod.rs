//! Repository traits: the read-only contracts the aggregation engine
//! depends on.
//!
//! Any networked or in-process data source satisfying these contracts is an
//! acceptable backend; implementations must be `Send + Sync` to work with
//! async Rust. The engine treats every operation as idempotent and performs
//! no retries of its own.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::api::ClientId;
use crate::db::models::{ClientRef, ClientVisitReport, DutyRecord, EmployeeRef};
use crate::models::calendar::DateRange;
use crate::routes::availability::PeriodSummary;

/// Roster lookups: the employee and client registries.
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Fetch all employees.
    async fn fetch_employees(&self) -> RepositoryResult<Vec<EmployeeRef>>;

    /// Fetch all clients.
    async fn fetch_clients(&self) -> RepositoryResult<Vec<ClientRef>>;
}

/// Reporting queries over a date range.
#[async_trait]
pub trait ReportingRepository: Send + Sync {
    /// Fetch the precomputed availability summary for the range.
    ///
    /// The summary is authoritative; the engine never rederives its counts
    /// from the raw records.
    async fn fetch_period_summary(&self, range: &DateRange) -> RepositoryResult<PeriodSummary>;

    /// Fetch the ordered unavailable/assigned records overlapping the range.
    async fn fetch_unavailable_records(
        &self,
        range: &DateRange,
    ) -> RepositoryResult<Vec<DutyRecord>>;

    /// Fetch one client's visit report (assignment volume and distinct
    /// employees) for the range.
    async fn fetch_client_visit_report(
        &self,
        client_id: &ClientId,
        range: &DateRange,
    ) -> RepositoryResult<ClientVisitReport>;

    /// Check that the backing source is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}

/// Combined repository interface used throughout the service layer.
pub trait FullRepository: RosterRepository + ReportingRepository {}

impl<T: RosterRepository + ReportingRepository> FullRepository for T {}
