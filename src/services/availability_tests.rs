use std::sync::Arc;

use async_trait::async_trait;

use crate::api::ClientId;
use crate::db::models::{ClientRef, ClientVisitReport, DutyRecord, EmployeeRef};
use crate::db::repository::{
    ReportingRepository, RepositoryError, RepositoryResult, RosterRepository,
};
use crate::models::calendar::{CalendarDate, DateRange};
use crate::routes::availability::PeriodSummary;

use super::{compute_availability_view, AvailabilityQuery};

/// Source with per-section failure switches, for exercising the degradation
/// rules of the aggregation pass.
#[derive(Default)]
struct SectionedSource {
    fail_summary: bool,
    fail_records: bool,
    fail_clients: bool,
    fail_employees: bool,
}

#[async_trait]
impl RosterRepository for SectionedSource {
    async fn fetch_employees(&self) -> RepositoryResult<Vec<EmployeeRef>> {
        if self.fail_employees {
            return Err(RepositoryError::connection("employees down"));
        }
        Ok(vec![EmployeeRef {
            id: "e1".into(),
            name: "Budi".to_string(),
        }])
    }

    async fn fetch_clients(&self) -> RepositoryResult<Vec<ClientRef>> {
        if self.fail_clients {
            return Err(RepositoryError::connection("clients down"));
        }
        Ok(vec![ClientRef {
            id: ClientId::new("c1"),
            name: "Acme".to_string(),
        }])
    }
}

#[async_trait]
impl ReportingRepository for SectionedSource {
    async fn fetch_period_summary(&self, range: &DateRange) -> RepositoryResult<PeriodSummary> {
        if self.fail_summary {
            return Err(RepositoryError::timeout("summary slow"));
        }
        Ok(PeriodSummary {
            total_assignments: 7,
            available: 4,
            unavailable: 2,
            unassigned: 1,
            start_date: Some(range.start.to_string()),
            end_date: Some(range.end.to_string()),
        })
    }

    async fn fetch_unavailable_records(
        &self,
        _range: &DateRange,
    ) -> RepositoryResult<Vec<DutyRecord>> {
        if self.fail_records {
            return Err(RepositoryError::query("report query failed"));
        }
        Ok(vec![DutyRecord {
            employee_id: "e1".into(),
            name: String::new(),
            agenda: "deployment".to_string(),
            start_date: "2025-08-20".to_string(),
            end_date: None,
            client: Some("Acme".to_string()),
        }])
    }

    async fn fetch_client_visit_report(
        &self,
        _client_id: &ClientId,
        range: &DateRange,
    ) -> RepositoryResult<ClientVisitReport> {
        Ok(ClientVisitReport {
            total_assignments: 3,
            unique_employees: 2,
            start_date: range.start.to_string(),
            end_date: range.end.to_string(),
        })
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

fn query() -> AvailabilityQuery {
    AvailabilityQuery::for_date(CalendarDate::parse("2025-08-20"))
}

#[tokio::test]
async fn test_happy_path_composes_all_sections() {
    let repo = Arc::new(SectionedSource::default());
    let view = compute_availability_view(repo, &query()).await;

    assert_eq!(view.summary.total_assignments, 7);
    assert_eq!(view.rows.len(), 1);
    // blank record name resolved through the employee roster
    assert_eq!(view.rows[0].employee_name, "Budi");
    assert_eq!(view.kpis.len(), 1);
    assert_eq!(view.kpis[0].total_assignments, 3);
    assert!(view.selected.is_none());
}

#[tokio::test]
async fn test_client_filter_selects_matching_kpi() {
    let repo = Arc::new(SectionedSource::default());
    let view =
        compute_availability_view(repo, &query().with_client(ClientId::new("c1"))).await;

    let selected = view.selected.expect("matching client should be selected");
    assert_eq!(selected.client_id, ClientId::new("c1"));
    assert_eq!(selected.total_assignments, 3);
}

#[tokio::test]
async fn test_unknown_client_filter_yields_no_data() {
    let repo = Arc::new(SectionedSource::default());
    let view =
        compute_availability_view(repo, &query().with_client(ClientId::new("ghost"))).await;

    assert!(view.selected.is_none());
    assert_eq!(view.kpis.len(), 1);
}

#[tokio::test]
async fn test_summary_failure_degrades_to_zero_counts() {
    let repo = Arc::new(SectionedSource {
        fail_summary: true,
        ..Default::default()
    });
    let view = compute_availability_view(repo, &query()).await;

    assert_eq!(view.summary.total_assignments, 0);
    assert_eq!(view.summary.start_date.as_deref(), Some("2025-08-20"));
    // the rest of the pass still completed
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.kpis.len(), 1);
}

#[tokio::test]
async fn test_records_failure_degrades_to_empty_rows() {
    let repo = Arc::new(SectionedSource {
        fail_records: true,
        ..Default::default()
    });
    let view = compute_availability_view(repo, &query()).await;

    assert!(view.rows.is_empty());
    assert_eq!(view.summary.total_assignments, 7);
    assert_eq!(view.kpis.len(), 1);
}

#[tokio::test]
async fn test_employee_roster_failure_disables_name_fallback() {
    let repo = Arc::new(SectionedSource {
        fail_employees: true,
        ..Default::default()
    });
    let view = compute_availability_view(repo, &query()).await;

    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].employee_name, "-");
}

#[tokio::test]
async fn test_total_outage_degrades_to_empty_view() {
    let repo = Arc::new(SectionedSource {
        fail_summary: true,
        fail_records: true,
        fail_clients: true,
        fail_employees: true,
    });
    let view = compute_availability_view(repo, &query()).await;

    assert_eq!(view.summary.total_assignments, 0);
    assert!(view.rows.is_empty());
    assert!(view.kpis.is_empty());
    assert!(view.selected.is_none());
}
