//! Job CRUD and listing on top of the job repository.

use std::sync::Arc;

use tracing::{debug, info};

use jobspark_core::error::AppError;
use jobspark_core::traits::Repository;
use jobspark_core::types::PageResponse;
use jobspark_entity::{CreateJob, Job, JobId, UpdateJob};
use jobspark_store::JobRepository;

use crate::query::{self, JobQuery};

/// Message returned when a create request lacks a mandatory field.
pub const REQUIRED_FIELDS_MESSAGE: &str = "title, company, and description are required";

/// Message returned for unknown job identifiers.
pub const NOT_FOUND_MESSAGE: &str = "Job not found";

/// Validates input and forwards job operations to the repository.
#[derive(Debug, Clone)]
pub struct JobService {
    /// Job repository.
    job_repo: Arc<dyn JobRepository>,
}

impl JobService {
    /// Creates a new job service.
    pub fn new(job_repo: Arc<dyn JobRepository>) -> Self {
        Self { job_repo }
    }

    /// Resolves a listing query against the current collection.
    pub async fn list(&self, query: &JobQuery) -> Result<PageResponse<Job>, AppError> {
        let snapshot = self.job_repo.find_all().await?;
        let page = query::run(&snapshot, query);

        debug!(
            total = page.total,
            page = page.page,
            pages = page.pages,
            sort = query.sort.as_str(),
            "Resolved job listing"
        );
        Ok(page)
    }

    /// Gets a single job.
    pub async fn get(&self, id: JobId) -> Result<Job, AppError> {
        self.job_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))
    }

    /// Creates a job after checking that the mandatory fields are non-empty.
    pub async fn create(&self, data: CreateJob) -> Result<Job, AppError> {
        if data.title.is_empty() || data.company.is_empty() || data.description.is_empty() {
            return Err(AppError::validation(REQUIRED_FIELDS_MESSAGE));
        }

        let job = self.job_repo.create(data).await?;
        info!(job_id = %job.id, company = %job.company, "Job created");
        Ok(job)
    }

    /// Applies a partial update. The identifier never changes.
    pub async fn update(&self, id: JobId, patch: UpdateJob) -> Result<Job, AppError> {
        let job = self
            .job_repo
            .update(id, patch)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))?;

        info!(job_id = %id, "Job updated");
        Ok(job)
    }

    /// Deletes a job and returns the removed record.
    pub async fn delete(&self, id: JobId) -> Result<Job, AppError> {
        let job = self
            .job_repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))?;

        info!(job_id = %id, "Job deleted");
        Ok(job)
    }

    /// Number of jobs currently stored.
    pub async fn count(&self) -> Result<u64, AppError> {
        self.job_repo.count().await
    }
}
