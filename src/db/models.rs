//! Boundary record types decoded from the external data sources.
//!
//! Upstream payloads are loosely shaped (optional fields, numeric-or-string
//! ids); decoding them into these types at the repository boundary turns
//! shape problems into explicit validation errors instead of silently
//! accepted values.

use serde::{Deserialize, Serialize};

pub use crate::api::{ClientId, EmployeeId};
pub use crate::routes::availability::PeriodSummary;

/// Employee registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRef {
    pub id: EmployeeId,
    pub name: String,
}

/// Client registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRef {
    pub id: ClientId,
    pub name: String,
}

/// Raw unavailable/assigned record as returned by the reporting source.
///
/// Owned by the query that produced it and discarded once a display row has
/// been built from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DutyRecord {
    pub employee_id: EmployeeId,
    /// Employee display name; may be blank, in which case the roster lookup
    /// supplies it.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub agenda: String,
    /// `YYYY-MM-DD`, possibly carrying a trailing timestamp from loose
    /// sources.
    pub start_date: String,
    /// Absent or empty means the assignment is single-day.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Client display name, if the assignment is tied to a client.
    #[serde(default)]
    pub client: Option<String>,
}

/// Stored duty assignment row, the backing record the reporting aggregates
/// are derived from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DutyAssignment {
    pub employee_id: EmployeeId,
    #[serde(default)]
    pub client_id: Option<ClientId>,
    #[serde(default)]
    pub agenda: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_unavailable: bool,
}

impl DutyAssignment {
    /// Effective end date, defaulted to the start date.
    pub fn end_or_start(&self) -> &str {
        self.end_date
            .as_deref()
            .filter(|e| !e.is_empty())
            .unwrap_or(&self.start_date)
    }
}

/// Per-client visit report for a fixed date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientVisitReport {
    pub total_assignments: i64,
    pub unique_employees: i64,
    pub start_date: String,
    pub end_date: String,
}

#[cfg(test)]
mod tests {
    use super::{DutyAssignment, DutyRecord, EmployeeId};

    #[test]
    fn test_duty_record_decodes_loose_payload() {
        // name/end_date/client omitted entirely by the upstream source
        let json = r#"{"employee_id": "12", "start_date": "2025-08-20"}"#;
        let record: DutyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.employee_id, EmployeeId::new("12"));
        assert!(record.name.is_empty());
        assert!(record.end_date.is_none());
        assert!(record.client.is_none());
    }

    #[test]
    fn test_duty_record_rejects_missing_start_date() {
        let json = r#"{"employee_id": "12"}"#;
        assert!(serde_json::from_str::<DutyRecord>(json).is_err());
    }

    #[test]
    fn test_assignment_end_or_start() {
        let mut assignment = DutyAssignment {
            employee_id: EmployeeId::new("1"),
            client_id: None,
            agenda: String::new(),
            start_date: "2025-08-20".to_string(),
            end_date: None,
            is_unavailable: true,
        };
        assert_eq!(assignment.end_or_start(), "2025-08-20");

        assignment.end_date = Some(String::new());
        assert_eq!(assignment.end_or_start(), "2025-08-20");

        assignment.end_date = Some("2025-08-22".to_string());
        assert_eq!(assignment.end_or_start(), "2025-08-22");
    }
}
