//! In-memory repository implementation for unit testing and local
//! development.
//!
//! The local backend plays the external source of truth: it stores raw
//! [`DutyAssignment`] rows and derives the period summary, the unavailable
//! report, and the per-client visit reports from that one store, so the
//! aggregates it serves can never drift from the records it serves.

use std::collections::HashSet;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::ClientId;
use crate::db::models::{ClientRef, ClientVisitReport, DutyAssignment, DutyRecord, EmployeeRef};
use crate::db::repository::{
    ReportingRepository, RepositoryResult, RosterRepository,
};
use crate::models::calendar::DateRange;
use crate::routes::availability::PeriodSummary;

#[derive(Default)]
struct Store {
    employees: Vec<EmployeeRef>,
    clients: Vec<ClientRef>,
    assignments: Vec<DutyAssignment>,
}

/// Seedable in-memory data source.
#[derive(Default)]
pub struct LocalRepository {
    store: RwLock<Store>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the employee registry.
    pub fn insert_employee(&self, employee: EmployeeRef) {
        self.store.write().employees.push(employee);
    }

    /// Seed the client registry.
    pub fn insert_client(&self, client: ClientRef) {
        self.store.write().clients.push(client);
    }

    /// Seed an assignment row. Report aggregates reflect it immediately.
    pub fn insert_assignment(&self, assignment: DutyAssignment) {
        self.store.write().assignments.push(assignment);
    }
}

/// Date-only slice, mirroring the normalization the row builder applies.
fn date_only(s: &str) -> &str {
    s.get(..10).unwrap_or(s)
}

/// Inclusive overlap of `[start, end]` with the queried range. `YYYY-MM-DD`
/// strings compare lexicographically in chronological order.
fn overlaps(assignment: &DutyAssignment, query_start: &str, query_end: &str) -> bool {
    let start = date_only(&assignment.start_date);
    let end = date_only(assignment.end_or_start());
    start <= query_end && end >= query_start
}

impl Store {
    fn employee_name(&self, id: &crate::api::EmployeeId) -> String {
        self.employees
            .iter()
            .find(|e| &e.id == id)
            .map(|e| e.name.clone())
            .unwrap_or_default()
    }

    fn client_name(&self, id: &ClientId) -> Option<String> {
        self.clients
            .iter()
            .find(|c| &c.id == id)
            .map(|c| c.name.clone())
    }
}

#[async_trait]
impl RosterRepository for LocalRepository {
    async fn fetch_employees(&self) -> RepositoryResult<Vec<EmployeeRef>> {
        Ok(self.store.read().employees.clone())
    }

    async fn fetch_clients(&self) -> RepositoryResult<Vec<ClientRef>> {
        Ok(self.store.read().clients.clone())
    }
}

#[async_trait]
impl ReportingRepository for LocalRepository {
    async fn fetch_period_summary(&self, range: &DateRange) -> RepositoryResult<PeriodSummary> {
        let store = self.store.read();
        let (query_start, query_end) = (range.start.to_string(), range.end.to_string());

        let overlapping: Vec<&DutyAssignment> = store
            .assignments
            .iter()
            .filter(|a| overlaps(a, &query_start, &query_end))
            .collect();

        let unavailable_employees: HashSet<&str> = overlapping
            .iter()
            .filter(|a| a.is_unavailable)
            .map(|a| a.employee_id.as_str())
            .collect();
        let assigned_employees: HashSet<&str> = overlapping
            .iter()
            .map(|a| a.employee_id.as_str())
            .collect();

        let employee_count = store.employees.len() as i64;
        let unavailable = unavailable_employees.len() as i64;

        Ok(PeriodSummary {
            total_assignments: overlapping.len() as i64,
            available: employee_count - unavailable,
            unavailable,
            unassigned: employee_count - assigned_employees.len() as i64,
            start_date: Some(query_start),
            end_date: Some(query_end),
        })
    }

    async fn fetch_unavailable_records(
        &self,
        range: &DateRange,
    ) -> RepositoryResult<Vec<DutyRecord>> {
        let store = self.store.read();
        let (query_start, query_end) = (range.start.to_string(), range.end.to_string());

        let records = store
            .assignments
            .iter()
            .filter(|a| a.is_unavailable && overlaps(a, &query_start, &query_end))
            .map(|a| DutyRecord {
                employee_id: a.employee_id.clone(),
                name: store.employee_name(&a.employee_id),
                agenda: a.agenda.clone(),
                start_date: a.start_date.clone(),
                end_date: a.end_date.clone(),
                client: a.client_id.as_ref().and_then(|id| store.client_name(id)),
            })
            .collect();

        Ok(records)
    }

    async fn fetch_client_visit_report(
        &self,
        client_id: &ClientId,
        range: &DateRange,
    ) -> RepositoryResult<ClientVisitReport> {
        let store = self.store.read();
        let (query_start, query_end) = (range.start.to_string(), range.end.to_string());

        let mut total = 0i64;
        let mut employees: HashSet<&str> = HashSet::new();
        for assignment in store
            .assignments
            .iter()
            .filter(|a| a.client_id.as_ref() == Some(client_id))
            .filter(|a| overlaps(a, &query_start, &query_end))
        {
            total += 1;
            employees.insert(assignment.employee_id.as_str());
        }

        Ok(ClientVisitReport {
            total_assignments: total,
            unique_employees: employees.len() as i64,
            start_date: query_start,
            end_date: query_end,
        })
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
