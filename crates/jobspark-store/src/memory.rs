//! In-memory job repository guarded by a Tokio `RwLock`.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use jobspark_core::result::AppResult;
use jobspark_core::traits::Repository;
use jobspark_entity::job::seed_jobs;
use jobspark_entity::{CreateJob, Job, JobId, UpdateJob};

/// Collection plus counter, always locked together so id assignment and
/// insertion happen as one step.
#[derive(Debug)]
struct JobTable {
    /// Jobs in collection order; newest creations sit at the front.
    jobs: Vec<Job>,
    /// Next identifier to hand out. Only ever increases.
    next_id: JobId,
}

impl JobTable {
    fn position(&self, id: JobId) -> Option<usize> {
        self.jobs.iter().position(|job| job.id == id)
    }
}

/// Job repository backed by a `Vec` in process memory.
#[derive(Debug)]
pub struct MemoryJobRepository {
    table: RwLock<JobTable>,
}

impl MemoryJobRepository {
    /// Create an empty store whose first job gets id 1.
    pub fn new() -> Self {
        Self::with_jobs(Vec::new())
    }

    /// Create a store holding `jobs` in the given order. The counter starts
    /// one past the largest existing id.
    pub fn with_jobs(jobs: Vec<Job>) -> Self {
        let next_id = jobs
            .iter()
            .map(|job| job.id)
            .max()
            .map_or(JobId::FIRST, JobId::next);
        Self {
            table: RwLock::new(JobTable { jobs, next_id }),
        }
    }

    /// Create a store pre-loaded with the reference postings.
    pub fn seeded() -> Self {
        Self::with_jobs(seed_jobs(Utc::now()))
    }
}

impl Default for MemoryJobRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<Job, JobId, CreateJob, UpdateJob> for MemoryJobRepository {
    async fn find_by_id(&self, id: JobId) -> AppResult<Option<Job>> {
        let table = self.table.read().await;
        Ok(table.jobs.iter().find(|job| job.id == id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Job>> {
        Ok(self.table.read().await.jobs.clone())
    }

    async fn create(&self, data: CreateJob) -> AppResult<Job> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id = id.next();

        let job = data.into_job(id, Utc::now());
        table.jobs.insert(0, job.clone());

        debug!(job_id = %id, total = table.jobs.len(), "Inserted job");
        Ok(job)
    }

    async fn update(&self, id: JobId, patch: UpdateJob) -> AppResult<Option<Job>> {
        let mut table = self.table.write().await;
        let Some(index) = table.position(id) else {
            return Ok(None);
        };

        let job = &mut table.jobs[index];
        patch.apply_to(job);

        debug!(job_id = %id, "Updated job");
        Ok(Some(job.clone()))
    }

    async fn delete(&self, id: JobId) -> AppResult<Option<Job>> {
        let mut table = self.table.write().await;
        let removed = table.position(id).map(|index| table.jobs.remove(index));

        if removed.is_some() {
            debug!(job_id = %id, total = table.jobs.len(), "Removed job");
        }
        Ok(removed)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.table.read().await.jobs.len() as u64)
    }
}
