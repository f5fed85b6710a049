//! Duty roster rows: the normalized, display-ready table of who is assigned
//! or unavailable over the queried period.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::EmployeeId;
use crate::db::models::DutyRecord;
use crate::models::calendar::{business_days_inclusive, CalendarDate};

/// Placeholder shown for missing names and clients.
const DASH: &str = "-";

/// One row of the on-duty table.
///
/// Rows are rebuilt from scratch on every aggregation pass and never mutated
/// afterwards. The synthetic `id` embeds the source index, so it is unique
/// within a pass but not stable across passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DutyRow {
    /// Synthetic row id of the form `<employeeId>-<index>`.
    pub id: String,
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub agenda: String,
    /// Date-only `YYYY-MM-DD` string.
    pub start_date: String,
    /// Date-only `YYYY-MM-DD` string, defaulted to `start_date`.
    pub end_date: String,
    pub client_name: String,
    /// True for the synthetic "no assignment" row of an idle employee.
    pub is_placeholder: bool,
    /// Business days (Mon-Fri) covered by `[start_date, end_date]`.
    pub business_days: u32,
}

impl DutyRow {
    /// Synthetic row for an employee with no assignments in the period.
    pub fn placeholder(employee_id: EmployeeId, employee_name: impl Into<String>) -> Self {
        DutyRow {
            id: format!("{}-placeholder", employee_id.as_str()),
            employee_id,
            employee_name: employee_name.into(),
            agenda: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            client_name: DASH.to_string(),
            is_placeholder: true,
            business_days: 0,
        }
    }

    /// Day count reported to the display layer.
    ///
    /// Placeholder rows always report 0. A row whose start and end dates are
    /// equal reports exactly 1 regardless of the computed business-day value,
    /// so a same-day duty assigned on a weekend still shows up as one day.
    pub fn display_days(&self) -> u32 {
        if self.is_placeholder {
            0
        } else if self.start_date == self.end_date {
            1
        } else {
            self.business_days
        }
    }
}

/// Date-only slice of a possibly longer timestamp string.
fn date_only(s: &str) -> &str {
    s.get(..10).unwrap_or(s)
}

/// Build display rows from raw unavailable/assigned records.
///
/// Records are processed in input order; `employee_names` is consulted only
/// when a record carries no name of its own. Individual malformed records
/// (unparseable dates) degrade to 0-day entries rather than aborting the
/// batch. The result is sorted by start date descending; rows with equal
/// start dates keep no guaranteed relative order.
pub fn build_duty_rows(
    records: &[DutyRecord],
    employee_names: &HashMap<EmployeeId, String>,
) -> Vec<DutyRow> {
    let mut rows: Vec<DutyRow> = records
        .iter()
        .enumerate()
        .map(|(index, record)| build_row(record, index, employee_names))
        .collect();

    // YYYY-MM-DD strings compare lexicographically in chronological order.
    rows.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    rows
}

fn build_row(
    record: &DutyRecord,
    index: usize,
    employee_names: &HashMap<EmployeeId, String>,
) -> DutyRow {
    let start = date_only(&record.start_date).to_string();
    let end_raw = record
        .end_date
        .as_deref()
        .filter(|e| !e.is_empty())
        .unwrap_or(&record.start_date);
    let end = date_only(end_raw).to_string();

    let employee_name = if !record.name.is_empty() {
        record.name.clone()
    } else {
        employee_names
            .get(&record.employee_id)
            .cloned()
            .unwrap_or_else(|| DASH.to_string())
    };

    let client_name = record
        .client
        .clone()
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DASH.to_string());

    let business_days = match (CalendarDate::parse_opt(&start), CalendarDate::parse_opt(&end)) {
        (Some(s), Some(e)) => business_days_inclusive(s, e),
        _ => 0,
    };

    DutyRow {
        id: format!("{}-{}", record.employee_id.as_str(), index),
        employee_id: record.employee_id.clone(),
        employee_name,
        agenda: record.agenda.clone(),
        start_date: start,
        end_date: end,
        client_name,
        is_placeholder: false,
        business_days,
    }
}
