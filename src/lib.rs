//! # Roster Rust Backend
//!
//! Availability and duty-roster aggregation engine for the on-duty
//! dashboard.
//!
//! For a given date or date range the engine determines, per employee,
//! whether they are assigned/unavailable, computes business-day durations
//! for each assignment, rolls these up into global counts
//! (available / unavailable / unassigned / total), and computes per-client
//! visit KPIs — all while tolerating partial failures from any one of the
//! independent data sources queried concurrently.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes and the DTO surface
//! - [`models`]: Calendar dates and business-day math
//! - [`routes`]: Display-ready DTOs and the pure logic that builds them
//! - [`db`]: Repository pattern over the external data sources
//! - [`services`]: Aggregation passes, KPI fan-out, and the stale-pass guard
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Failure Model
//!
//! No fatal errors originate from the engine. A failed per-client KPI fetch
//! degrades to the all-zero KPI, a failed summary or records fetch empties
//! that section of the aggregate, and a superseded aggregation pass is
//! silently discarded.

// Allow large error types - RepositoryError carries rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
