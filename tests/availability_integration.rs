//! End-to-end aggregation passes over the in-memory repository.

mod support;

use std::sync::Arc;

use roster_rust::api::ClientId;
use roster_rust::db::repositories::LocalRepository;
use roster_rust::db::repository::FullRepository;
use roster_rust::models::calendar::{CalendarDate, DateRange};
use roster_rust::services::availability::{compute_availability_view, AvailabilityQuery};
use roster_rust::services::pass_tracker::PassTracker;

use support::sample_roster;

fn repo() -> Arc<dyn FullRepository> {
    Arc::new(sample_roster())
}

fn week_query() -> AvailabilityQuery {
    AvailabilityQuery::new(DateRange::new(
        CalendarDate::parse("2025-08-18"),
        CalendarDate::parse("2025-08-22"),
    ))
}

#[tokio::test]
async fn test_full_pass_composition() {
    let view = compute_availability_view(repo(), &week_query()).await;

    // all three assignments overlap the week
    assert_eq!(view.summary.total_assignments, 3);
    assert_eq!(view.rows.len(), 3);
    assert_eq!(view.kpis.len(), 2);
    assert!(view.selected.is_none());

    // rows sorted by start date descending
    let starts: Vec<&str> = view.rows.iter().map(|r| r.start_date.as_str()).collect();
    assert_eq!(starts, vec!["2025-08-21", "2025-08-20", "2025-08-18"]);

    // names resolved from the roster
    assert!(view.rows.iter().any(|r| r.employee_name == "Budi"));
    assert!(view.rows.iter().any(|r| r.employee_name == "Sari"));
}

#[tokio::test]
async fn test_business_day_totals_per_row() {
    let view = compute_availability_view(repo(), &week_query()).await;

    let week_long = view
        .rows
        .iter()
        .find(|r| r.start_date == "2025-08-18")
        .unwrap();
    assert_eq!(week_long.business_days, 5);
    assert_eq!(week_long.display_days(), 5);

    let single_day = view
        .rows
        .iter()
        .find(|r| r.start_date == "2025-08-20")
        .unwrap();
    assert_eq!(single_day.display_days(), 1);
}

#[tokio::test]
async fn test_kpis_mirror_client_roster_order() {
    let view = compute_availability_view(repo(), &week_query()).await;

    let ids: Vec<&str> = view.kpis.iter().map(|k| k.client_id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2"]);

    // Acme: two assignments by two distinct employees
    assert_eq!(view.kpis[0].total_assignments, 2);
    assert_eq!(view.kpis[0].unique_employees, 2);
    // Globex: one assignment by one employee
    assert_eq!(view.kpis[1].total_assignments, 1);
    assert_eq!(view.kpis[1].unique_employees, 1);
}

#[tokio::test]
async fn test_client_filter_focuses_kpi() {
    let query = week_query().with_client(ClientId::new("c2"));
    let view = compute_availability_view(repo(), &query).await;

    let selected = view.selected.expect("c2 should match");
    assert_eq!(selected.client_name, "Globex");
    assert_eq!(selected.total_assignments, 1);
}

#[tokio::test]
async fn test_unknown_client_filter_is_no_data_not_error() {
    let query = week_query().with_client(ClientId::new("nope"));
    let view = compute_availability_view(repo(), &query).await;

    assert!(view.selected.is_none());
    assert_eq!(view.kpis.len(), 2);
}

#[tokio::test]
async fn test_summary_and_rows_agree_for_single_source() {
    // The local backend derives both aggregates from one assignment store,
    // so the authoritative summary and the row-derived counts cannot drift.
    let view = compute_availability_view(repo(), &week_query()).await;

    assert_eq!(view.summary.total_assignments, view.rows.len() as i64);

    let distinct_unavailable: std::collections::HashSet<&str> = view
        .rows
        .iter()
        .map(|r| r.employee_id.as_str())
        .collect();
    assert_eq!(view.summary.unavailable, distinct_unavailable.len() as i64);
}

#[tokio::test]
async fn test_kpi_invariant_total_at_least_unique() {
    let view = compute_availability_view(repo(), &week_query()).await;
    assert!(view
        .kpis
        .iter()
        .all(|k| k.total_assignments >= k.unique_employees));
}

#[tokio::test]
async fn test_changed_date_never_leaks_previous_rows() {
    let repo = repo();
    let tracker = PassTracker::new();

    let monday = tracker
        .run(
            Arc::clone(&repo),
            AvailabilityQuery::for_date(CalendarDate::parse("2025-08-18")),
        )
        .await;
    assert_eq!(monday.rows.len(), 1);
    assert!(monday.rows.iter().all(|r| r.start_date == "2025-08-18"));

    let thursday = tracker
        .run(
            Arc::clone(&repo),
            AvailabilityQuery::for_date(CalendarDate::parse("2025-08-21")),
        )
        .await;

    // the new pass carries only rows overlapping the new date
    assert_eq!(thursday.rows.len(), 2);
    assert!(thursday
        .rows
        .iter()
        .all(|r| r.start_date.as_str() <= "2025-08-21" && r.end_date.as_str() >= "2025-08-21"));

    // and the latest snapshot is the new pass, not a merge
    let latest = tracker.latest().unwrap();
    assert_eq!(latest.rows.len(), thursday.rows.len());
}

#[tokio::test]
async fn test_empty_repository_yields_empty_view() {
    let repo: Arc<dyn FullRepository> = Arc::new(LocalRepository::new());
    let view = compute_availability_view(repo, &week_query()).await;

    assert_eq!(view.summary.total_assignments, 0);
    assert!(view.rows.is_empty());
    assert!(view.kpis.is_empty());
    assert!(view.selected.is_none());
}
