//! Per-client visit KPIs for the dashboard chart and detail card.

use serde::{Deserialize, Serialize};

use crate::api::ClientId;

/// Assignment volume and distinct-employee count for one client over a fixed
/// date range. One instance per client per aggregation pass; independent of
/// every other client's KPI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientKpi {
    pub client_id: ClientId,
    pub client_name: String,
    pub total_assignments: i64,
    pub unique_employees: i64,
}

impl ClientKpi {
    /// All-zero KPI recorded when the per-client report fetch fails.
    pub fn zero(client_id: ClientId, client_name: impl Into<String>) -> Self {
        ClientKpi {
            client_id,
            client_name: client_name.into(),
            total_assignments: 0,
            unique_employees: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_kpi() {
        let kpi = ClientKpi::zero(ClientId::new("c1"), "Acme");
        assert_eq!(kpi.total_assignments, 0);
        assert_eq!(kpi.unique_employees, 0);
        assert_eq!(kpi.client_name, "Acme");
    }

    #[test]
    fn test_kpi_clone() {
        let kpi = ClientKpi {
            client_id: ClientId::new("c1"),
            client_name: "Acme".to_string(),
            total_assignments: 4,
            unique_employees: 2,
        };
        let cloned = kpi.clone();
        assert_eq!(cloned, kpi);
    }

    #[test]
    fn test_kpi_serializes_counts() {
        let kpi = ClientKpi {
            client_id: ClientId::new("c1"),
            client_name: "Acme".to_string(),
            total_assignments: 4,
            unique_employees: 2,
        };
        let json = serde_json::to_value(&kpi).unwrap();
        assert_eq!(json["total_assignments"], 4);
        assert_eq!(json["unique_employees"], 2);
    }
}
