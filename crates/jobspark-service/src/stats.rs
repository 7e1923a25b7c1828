//! Board-wide statistics.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use jobspark_core::error::AppError;
use jobspark_core::traits::Repository;
use jobspark_entity::Job;
use jobspark_store::JobRepository;

/// Counters shown on the board's landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStats {
    /// Number of postings.
    pub total_jobs: u64,
    /// Postings whose work mode is `"Remote"`.
    pub remote_jobs: u64,
    /// Postings flagged as featured.
    pub featured_jobs: u64,
    /// Distinct categories, in order of first appearance.
    pub categories: Vec<String>,
    /// Number of distinct companies.
    pub companies: u64,
}

impl JobStats {
    /// Aggregate over a snapshot of the collection.
    pub fn compute(jobs: &[Job]) -> Self {
        let mut seen = HashSet::new();
        let categories = jobs
            .iter()
            .filter(|job| seen.insert(job.category.as_str()))
            .map(|job| job.category.clone())
            .collect();

        let companies = jobs
            .iter()
            .map(|job| job.company.as_str())
            .collect::<HashSet<_>>()
            .len() as u64;

        Self {
            total_jobs: jobs.len() as u64,
            remote_jobs: jobs.iter().filter(|job| job.is_remote()).count() as u64,
            featured_jobs: jobs.iter().filter(|job| job.featured).count() as u64,
            categories,
            companies,
        }
    }
}

/// Computes [`JobStats`] from the live store on every call.
#[derive(Debug, Clone)]
pub struct StatsService {
    /// Job repository.
    job_repo: Arc<dyn JobRepository>,
}

impl StatsService {
    /// Creates a new stats service.
    pub fn new(job_repo: Arc<dyn JobRepository>) -> Self {
        Self { job_repo }
    }

    /// Current board statistics. Never cached.
    pub async fn stats(&self) -> Result<JobStats, AppError> {
        let jobs = self.job_repo.find_all().await?;
        Ok(JobStats::compute(&jobs))
    }
}
