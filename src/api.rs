//! Public API surface for the roster backend.
//!
//! This file consolidates the identifier newtypes and re-exports the DTO
//! types produced by the route modules. All types derive
//! Serialize/Deserialize for JSON serialization.

pub use crate::routes::availability::AvailabilityView;
pub use crate::routes::availability::PeriodSummary;
pub use crate::routes::duty::DutyRow;
pub use crate::routes::kpi::ClientKpi;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Employee identifier.
///
/// The upstream sources hand out both numeric and string ids, so identifiers
/// are carried as strings end to end.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub String);

/// Client identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub String);

impl EmployeeId {
    pub fn new(value: impl Into<String>) -> Self {
        EmployeeId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ClientId {
    pub fn new(value: impl Into<String>) -> Self {
        ClientId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(value: &str) -> Self {
        EmployeeId(value.to_string())
    }
}

impl From<&str> for ClientId {
    fn from(value: &str) -> Self {
        ClientId(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{ClientId, EmployeeId};

    #[test]
    fn test_employee_id_roundtrip() {
        let id = EmployeeId::new("42");
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_client_id_equality() {
        assert_eq!(ClientId::new("acme"), ClientId::from("acme"));
        assert_ne!(ClientId::new("acme"), ClientId::new("other"));
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = EmployeeId::new("7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"7\"");
        let back: EmployeeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
