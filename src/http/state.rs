//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::FullRepository;
use crate::services::pass_tracker::PassTracker;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for data-source operations
    pub repository: Arc<dyn FullRepository>,
    /// Tracker guarding against stale aggregation passes
    pub pass_tracker: Arc<PassTracker>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self {
            repository,
            pass_tracker: Arc::new(PassTracker::new()),
        }
    }
}
