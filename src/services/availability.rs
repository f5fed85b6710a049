//! The availability aggregation pass.
//!
//! One pass fans out to the independent data sources, builds the duty rows
//! and client KPIs, and composes the single read-model the display layer
//! consumes. Every section degrades independently: a failed fetch empties
//! or zeroes its own section and the rest of the pass still completes, so
//! no fatal error ever originates here.

use std::collections::HashMap;
use std::sync::Arc;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::api::ClientId;
use crate::db::repository::FullRepository;
use crate::db::services as db_services;
use crate::models::calendar::{CalendarDate, DateRange};
use crate::routes::availability::{AvailabilityView, PeriodSummary};
use crate::routes::duty::build_duty_rows;
use crate::services::client_kpi::aggregate_client_kpis;

/// Input parameters of one aggregation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    pub range: DateRange,
    /// Focus the KPI card on one client; `None` shows all clients.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_filter: Option<ClientId>,
}

impl AvailabilityQuery {
    pub fn new(range: DateRange) -> Self {
        Self {
            range,
            client_filter: None,
        }
    }

    /// Single-day query, the dashboard's default shape.
    pub fn for_date(date: CalendarDate) -> Self {
        Self::new(DateRange::single(date))
    }

    pub fn with_client(mut self, client_id: ClientId) -> Self {
        self.client_filter = Some(client_id);
        self
    }
}

/// Run one full aggregation pass.
///
/// The four independent fetches (summary, raw records, client roster,
/// employee roster) are issued concurrently; the per-client KPI fan-out
/// follows once the roster is known. The returned view is a self-contained
/// immutable snapshot for exactly this query.
pub async fn compute_availability_view(
    repo: Arc<dyn FullRepository>,
    query: &AvailabilityQuery,
) -> AvailabilityView {
    let range = &query.range;

    let (summary_res, records_res, clients_res, names_res) = tokio::join!(
        db_services::fetch_period_summary(repo.as_ref(), range),
        db_services::fetch_unavailable_records(repo.as_ref(), range),
        db_services::fetch_clients(repo.as_ref()),
        db_services::employee_name_index(repo.as_ref()),
    );

    let summary = summary_res.unwrap_or_else(|err| {
        warn!("period summary fetch failed, serving zero counts: {}", err);
        PeriodSummary::zero_for(range)
    });
    let records = records_res.unwrap_or_else(|err| {
        warn!("unavailable report fetch failed, serving empty rows: {}", err);
        Vec::new()
    });
    let clients = clients_res.unwrap_or_else(|err| {
        warn!("client roster fetch failed, serving empty KPI list: {}", err);
        Vec::new()
    });
    let employee_names = names_res.unwrap_or_else(|err| {
        warn!("employee roster fetch failed, name fallback disabled: {}", err);
        HashMap::new()
    });

    let rows = build_duty_rows(&records, &employee_names);

    let kpis = aggregate_client_kpis(Arc::clone(&repo), &clients, range).await;
    let selected = query
        .client_filter
        .as_ref()
        .and_then(|id| kpis.iter().find(|k| &k.client_id == id).cloned());

    AvailabilityView {
        summary,
        rows,
        kpis,
        selected,
    }
}

#[cfg(test)]
#[path = "availability_tests.rs"]
mod availability_tests;
