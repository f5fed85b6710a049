//! The composed availability read-model handed to the display layer.

use serde::{Deserialize, Serialize};

use crate::models::calendar::DateRange;
use crate::routes::duty::DutyRow;
use crate::routes::kpi::ClientKpi;

/// Period-level availability counts.
///
/// Sourced as a single precomputed aggregate from the summary collaborator;
/// the engine never rederives these numbers from the row data, so they stay
/// consistent with the external source of truth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    #[serde(default)]
    pub total_assignments: i64,
    #[serde(default)]
    pub available: i64,
    #[serde(default)]
    pub unavailable: i64,
    #[serde(default)]
    pub unassigned: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl PeriodSummary {
    /// All-zero summary echoing the queried range, used when the summary
    /// fetch fails and the pass degrades instead of aborting.
    pub fn zero_for(range: &DateRange) -> Self {
        PeriodSummary {
            start_date: Some(range.start.to_string()),
            end_date: Some(range.end.to_string()),
            ..PeriodSummary::default()
        }
    }
}

/// One aggregation pass's complete result: summary cards, table rows,
/// per-client KPIs, and the optionally focused client KPI.
///
/// Immutable snapshot; a new date or client filter produces a fresh instance
/// and the old one is discarded wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailabilityView {
    pub summary: PeriodSummary,
    pub rows: Vec<DutyRow>,
    pub kpis: Vec<ClientKpi>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<ClientKpi>,
}
