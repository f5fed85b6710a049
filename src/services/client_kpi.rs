//! Concurrent per-client KPI aggregation.

use std::sync::Arc;

use futures::future::join_all;
use log::warn;

use crate::db::models::ClientRef;
use crate::db::repository::FullRepository;
use crate::db::services as db_services;
use crate::models::calendar::DateRange;
use crate::routes::kpi::ClientKpi;

/// Compute one KPI per client for the given range.
///
/// One task is spawned per client and all are joined positionally, so the
/// output mirrors the input client ordering regardless of completion order
/// and contains exactly one entry per input client. A failed report fetch
/// (or a panicked task) degrades that client to the all-zero KPI; a single
/// client failure never fails the aggregation pass.
pub async fn aggregate_client_kpis(
    repo: Arc<dyn FullRepository>,
    clients: &[ClientRef],
    range: &DateRange,
) -> Vec<ClientKpi> {
    let handles: Vec<_> = clients
        .iter()
        .cloned()
        .map(|client| {
            let repo = Arc::clone(&repo);
            let range = range.clone();
            tokio::spawn(async move {
                match db_services::fetch_client_visit_report(repo.as_ref(), &client.id, &range)
                    .await
                {
                    Ok(report) => ClientKpi {
                        client_id: client.id,
                        client_name: client.name,
                        total_assignments: report.total_assignments,
                        unique_employees: report.unique_employees,
                    },
                    Err(err) => {
                        warn!("visit report fetch failed for client {}: {}", client.id, err);
                        ClientKpi::zero(client.id, client.name)
                    }
                }
            })
        })
        .collect();

    join_all(handles)
        .await
        .into_iter()
        .zip(clients)
        .map(|(joined, client)| {
            joined.unwrap_or_else(|err| {
                warn!("KPI task failed for client {}: {}", client.id, err);
                ClientKpi::zero(client.id.clone(), client.name.clone())
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "client_kpi_tests.rs"]
mod client_kpi_tests;
