//! Stale-pass guard for the availability dashboard.
//!
//! Every date or client-filter change starts a full fresh aggregation pass.
//! In-flight fetches of a superseded pass are not cancelled; instead their
//! result is checked against the active pass when it lands and silently
//! discarded if a newer pass has started since. The tracker replaces ambient
//! last-fetched state with an explicit sequence-numbered pass object.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::debug;
use parking_lot::Mutex;

use crate::db::repository::FullRepository;
use crate::routes::availability::AvailabilityView;
use crate::services::availability::{compute_availability_view, AvailabilityQuery};

/// Handle for one started pass: its sequence number and input parameters.
#[derive(Debug, Clone)]
pub struct PassTicket {
    seq: u64,
    query: AvailabilityQuery,
}

impl PassTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &AvailabilityQuery {
        &self.query
    }
}

#[derive(Default)]
struct TrackerState {
    active: Option<(u64, AvailabilityQuery)>,
    latest: Option<Arc<AvailabilityView>>,
}

/// Tracks the active aggregation pass and the latest committed snapshot.
#[derive(Default)]
pub struct PassTracker {
    seq: AtomicU64,
    state: Mutex<TrackerState>,
}

impl PassTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new pass, superseding any pass still in flight.
    pub fn begin(&self, query: AvailabilityQuery) -> PassTicket {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.lock().active = Some((seq, query.clone()));
        PassTicket { seq, query }
    }

    /// Commit a finished pass's result.
    ///
    /// The snapshot is installed only when the ticket still identifies the
    /// active pass (same sequence number and same input parameters). A
    /// superseded ticket's result is discarded and `None` is returned; the
    /// discard is not an error.
    pub fn commit(
        &self,
        ticket: &PassTicket,
        view: AvailabilityView,
    ) -> Option<Arc<AvailabilityView>> {
        let mut state = self.state.lock();
        match &state.active {
            Some((seq, query)) if *seq == ticket.seq && *query == ticket.query => {
                let snapshot = Arc::new(view);
                state.latest = Some(Arc::clone(&snapshot));
                Some(snapshot)
            }
            _ => {
                debug!("discarding stale pass result (seq {})", ticket.seq);
                None
            }
        }
    }

    /// The latest committed snapshot, if any pass has completed.
    pub fn latest(&self) -> Option<Arc<AvailabilityView>> {
        self.state.lock().latest.clone()
    }

    /// Run one complete pass: begin, compute, commit.
    ///
    /// When this pass is superseded while computing, its result is discarded
    /// and the newest committed snapshot is served instead (or an empty view
    /// when nothing has committed yet), so stale data never reaches the
    /// caller.
    pub async fn run(
        &self,
        repo: Arc<dyn FullRepository>,
        query: AvailabilityQuery,
    ) -> Arc<AvailabilityView> {
        let ticket = self.begin(query);
        let view = compute_availability_view(repo, ticket.query()).await;
        match self.commit(&ticket, view) {
            Some(snapshot) => snapshot,
            None => self
                .latest()
                .unwrap_or_else(|| Arc::new(AvailabilityView::default())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PassTracker;
    use crate::models::calendar::CalendarDate;
    use crate::routes::availability::{AvailabilityView, PeriodSummary};
    use crate::services::availability::AvailabilityQuery;

    fn query(date: &str) -> AvailabilityQuery {
        AvailabilityQuery::for_date(CalendarDate::parse(date))
    }

    fn view_with_total(total: i64) -> AvailabilityView {
        AvailabilityView {
            summary: PeriodSummary {
                total_assignments: total,
                ..PeriodSummary::default()
            },
            ..AvailabilityView::default()
        }
    }

    #[test]
    fn test_commit_current_pass() {
        let tracker = PassTracker::new();
        let ticket = tracker.begin(query("2025-08-20"));

        let committed = tracker.commit(&ticket, view_with_total(3));
        assert!(committed.is_some());
        assert_eq!(tracker.latest().unwrap().summary.total_assignments, 3);
    }

    #[test]
    fn test_superseded_pass_is_discarded() {
        let tracker = PassTracker::new();
        let stale = tracker.begin(query("2025-08-20"));
        let current = tracker.begin(query("2025-08-21"));

        // the stale pass finishes after the newer one started
        assert!(tracker.commit(&stale, view_with_total(1)).is_none());
        assert!(tracker.latest().is_none());

        assert!(tracker.commit(&current, view_with_total(2)).is_some());
        assert_eq!(tracker.latest().unwrap().summary.total_assignments, 2);
    }

    #[test]
    fn test_stale_commit_does_not_clobber_newer_snapshot() {
        let tracker = PassTracker::new();
        let stale = tracker.begin(query("2025-08-20"));
        let current = tracker.begin(query("2025-08-21"));

        tracker.commit(&current, view_with_total(2));
        assert!(tracker.commit(&stale, view_with_total(1)).is_none());

        assert_eq!(tracker.latest().unwrap().summary.total_assignments, 2);
    }

    #[test]
    fn test_sequence_numbers_increase() {
        let tracker = PassTracker::new();
        let a = tracker.begin(query("2025-08-20"));
        let b = tracker.begin(query("2025-08-20"));
        assert!(b.seq() > a.seq());
    }
}
