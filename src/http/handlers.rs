//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use super::dto::{
    AvailabilityParams, ClientListResponse, EmployeeListResponse, HealthResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::AvailabilityView;
use crate::db::services as db_services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the data
/// source is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository: repo_status,
    }))
}

// =============================================================================
// Availability Dashboard
// =============================================================================

/// GET /v1/availability
///
/// Run one availability aggregation pass for the queried date range and
/// optional client filter. Degraded sections (failed upstream fetches) come
/// back empty or zeroed rather than failing the request.
pub async fn get_availability(
    State(state): State<AppState>,
    Query(params): Query<AvailabilityParams>,
) -> HandlerResult<AvailabilityView> {
    let query = params.into_query();
    let view = state
        .pass_tracker
        .run(Arc::clone(&state.repository), query)
        .await;

    Ok(Json((*view).clone()))
}

// =============================================================================
// Roster Pass-Throughs
// =============================================================================

/// GET /v1/employees
///
/// List all employees for the dashboard's pickers.
pub async fn list_employees(State(state): State<AppState>) -> HandlerResult<EmployeeListResponse> {
    let employees = db_services::fetch_employees(state.repository.as_ref()).await?;
    let total = employees.len();

    Ok(Json(EmployeeListResponse { employees, total }))
}

/// GET /v1/clients
///
/// List all clients for the dashboard's client filter.
pub async fn list_clients(State(state): State<AppState>) -> HandlerResult<ClientListResponse> {
    let clients = db_services::fetch_clients(state.repository.as_ref()).await?;
    let total = clients.len();

    Ok(Json(ClientListResponse { clients, total }))
}
