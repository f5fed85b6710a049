//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that sits between the repository
//! traits and the display layer. Services orchestrate the concurrent data
//! fetches and compose the availability read-model.

pub mod availability;

pub mod client_kpi;

pub mod pass_tracker;

pub use availability::{compute_availability_view, AvailabilityQuery};
pub use client_kpi::aggregate_client_kpis;
pub use pass_tracker::{PassTicket, PassTracker};
