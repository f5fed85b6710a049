use roster_rust::api::{ClientId, EmployeeId};
use roster_rust::db::models::{ClientRef, DutyAssignment, EmployeeRef};
use roster_rust::db::repositories::LocalRepository;

/// Build an unavailable assignment row for seeding.
pub fn assignment(
    employee_id: &str,
    client_id: Option<&str>,
    agenda: &str,
    start: &str,
    end: Option<&str>,
) -> DutyAssignment {
    DutyAssignment {
        employee_id: EmployeeId::new(employee_id),
        client_id: client_id.map(ClientId::new),
        agenda: agenda.to_string(),
        start_date: start.to_string(),
        end_date: end.map(str::to_string),
        is_unavailable: true,
    }
}

/// A small roster with three employees, two clients, and assignments spread
/// over the week of 2025-08-18.
pub fn sample_roster() -> LocalRepository {
    let repo = LocalRepository::new();

    for (id, name) in [("e1", "Budi"), ("e2", "Sari"), ("e3", "Tono")] {
        repo.insert_employee(EmployeeRef {
            id: EmployeeId::new(id),
            name: name.to_string(),
        });
    }
    for (id, name) in [("c1", "Acme"), ("c2", "Globex")] {
        repo.insert_client(ClientRef {
            id: ClientId::new(id),
            name: name.to_string(),
        });
    }

    // Mon 2025-08-18 .. Fri 2025-08-22
    repo.insert_assignment(assignment(
        "e1",
        Some("c1"),
        "site visit",
        "2025-08-18",
        Some("2025-08-22"),
    ));
    // single-day, Wed
    repo.insert_assignment(assignment("e2", Some("c1"), "audit", "2025-08-20", None));
    // Thu .. Fri, other client
    repo.insert_assignment(assignment(
        "e2",
        Some("c2"),
        "training",
        "2025-08-21",
        Some("2025-08-22"),
    ));

    repo
}
