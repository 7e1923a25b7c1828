//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use jobspark_core::config::AppConfig;
use jobspark_service::{JobService, StatsService};
use jobspark_store::JobRepository;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Job CRUD and listing
    pub job_service: Arc<JobService>,
    /// Board statistics
    pub stats_service: Arc<StatsService>,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Wire services around a single job repository.
    pub fn new(config: AppConfig, job_repo: Arc<dyn JobRepository>) -> Self {
        Self {
            config: Arc::new(config),
            job_service: Arc::new(JobService::new(Arc::clone(&job_repo))),
            stats_service: Arc::new(StatsService::new(job_repo)),
            started_at: Instant::now(),
        }
    }
}
