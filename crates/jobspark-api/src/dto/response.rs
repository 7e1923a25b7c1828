//! Response DTOs.

use serde::{Deserialize, Serialize};

use jobspark_core::types::pagination::PageResponse;
use jobspark_entity::Job;

/// Body of `GET /api/jobs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListResponse {
    /// Jobs on the requested page.
    pub jobs: Vec<Job>,
    /// Matches after filtering, before pagination.
    pub total: u64,
    /// Requested page (1-based).
    pub page: u64,
    /// Total page count for the current limit.
    pub pages: u64,
}

impl From<PageResponse<Job>> for JobListResponse {
    fn from(page: PageResponse<Job>) -> Self {
        Self {
            jobs: page.items,
            total: page.total,
            page: page.page,
            pages: page.pages,
        }
    }
}

/// Body of `DELETE /api/jobs/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteJobResponse {
    /// Always `"Job deleted"`.
    pub message: String,
    /// The removed record.
    pub job: Job,
}

impl DeleteJobResponse {
    /// Wraps the removed record.
    pub fn new(job: Job) -> Self {
        Self {
            message: "Job deleted".to_string(),
            job,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
    /// Number of stored jobs.
    pub jobs: u64,
}
