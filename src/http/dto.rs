//! Data Transfer Objects for the HTTP API.
//!
//! The availability view DTOs are re-exported from the routes module since
//! they already derive Serialize/Deserialize; only the request shapes and
//! list envelopes live here.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{AvailabilityView, ClientKpi, DutyRow, PeriodSummary};
pub use crate::db::models::{ClientRef, EmployeeRef};

use crate::api::ClientId;
use crate::models::calendar::{CalendarDate, DateRange};
use crate::services::availability::AvailabilityQuery;

/// Query parameters for the availability endpoint.
///
/// All parameters are optional: a missing start date means "today", a
/// missing end date means the single-day range the dashboard defaults to.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AvailabilityParams {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
}

impl AvailabilityParams {
    /// Resolve the loose query parameters into a typed aggregation query.
    pub fn into_query(self) -> AvailabilityQuery {
        let start = self
            .start_date
            .as_deref()
            .map(CalendarDate::parse)
            .unwrap_or_else(CalendarDate::today);
        let end = self
            .end_date
            .as_deref()
            .map(CalendarDate::parse)
            .unwrap_or(start);

        let mut query = AvailabilityQuery::new(DateRange::new(start, end));
        if let Some(client_id) = self.client_id.filter(|id| !id.is_empty()) {
            query = query.with_client(ClientId::new(client_id));
        }
        query
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Data source connection status
    pub repository: String,
}

/// Employee list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeListResponse {
    pub employees: Vec<EmployeeRef>,
    pub total: usize,
}

/// Client list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientListResponse {
    pub clients: Vec<ClientRef>,
    pub total: usize,
}
