//! High-level data access functions over the repository traits.
//!
//! These thin wrappers attach the operation name to any error so failures
//! logged by the aggregation pass identify which fetch degraded. Use these
//! from application code instead of calling the traits directly.

use std::collections::HashMap;

use crate::api::{ClientId, EmployeeId};
use crate::db::models::{ClientRef, ClientVisitReport, DutyRecord, EmployeeRef};
use crate::db::repository::{FullRepository, RepositoryResult};
use crate::models::calendar::DateRange;
use crate::routes::availability::PeriodSummary;

/// Check that the backing data source is reachable.
pub async fn health_check(repo: &dyn FullRepository) -> RepositoryResult<bool> {
    repo.health_check()
        .await
        .map_err(|e| e.with_operation("health_check"))
}

/// Fetch the employee registry.
pub async fn fetch_employees(repo: &dyn FullRepository) -> RepositoryResult<Vec<EmployeeRef>> {
    repo.fetch_employees()
        .await
        .map_err(|e| e.with_operation("fetch_employees"))
}

/// Fetch the client registry.
pub async fn fetch_clients(repo: &dyn FullRepository) -> RepositoryResult<Vec<ClientRef>> {
    repo.fetch_clients()
        .await
        .map_err(|e| e.with_operation("fetch_clients"))
}

/// Fetch the precomputed availability summary for a range.
pub async fn fetch_period_summary(
    repo: &dyn FullRepository,
    range: &DateRange,
) -> RepositoryResult<PeriodSummary> {
    repo.fetch_period_summary(range)
        .await
        .map_err(|e| e.with_operation("fetch_period_summary"))
}

/// Fetch the raw unavailable/assigned records for a range.
pub async fn fetch_unavailable_records(
    repo: &dyn FullRepository,
    range: &DateRange,
) -> RepositoryResult<Vec<DutyRecord>> {
    repo.fetch_unavailable_records(range)
        .await
        .map_err(|e| e.with_operation("fetch_unavailable_records"))
}

/// Fetch one client's visit report for a range.
pub async fn fetch_client_visit_report(
    repo: &dyn FullRepository,
    client_id: &ClientId,
    range: &DateRange,
) -> RepositoryResult<ClientVisitReport> {
    repo.fetch_client_visit_report(client_id, range)
        .await
        .map_err(|e| e.with_operation("fetch_client_visit_report"))
}

/// Fetch the employee registry as an id -> name lookup, the fallback input
/// to the duty row builder.
pub async fn employee_name_index(
    repo: &dyn FullRepository,
) -> RepositoryResult<HashMap<EmployeeId, String>> {
    let employees = fetch_employees(repo).await?;
    Ok(employees.into_iter().map(|e| (e.id, e.name)).collect())
}
