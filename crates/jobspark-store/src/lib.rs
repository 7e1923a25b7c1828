//! # jobspark-store
//!
//! Process-local storage for job postings. The store is the single owner of
//! the collection and of the identifier counter; nothing is persisted.

pub mod memory;

pub use memory::MemoryJobRepository;

use jobspark_core::traits::Repository;
use jobspark_entity::{CreateJob, Job, JobId, UpdateJob};

/// Repository bound used by the service layer.
pub trait JobRepository: Repository<Job, JobId, CreateJob, UpdateJob> + std::fmt::Debug {}

impl<T> JobRepository for T where T: Repository<Job, JobId, CreateJob, UpdateJob> + std::fmt::Debug {}
