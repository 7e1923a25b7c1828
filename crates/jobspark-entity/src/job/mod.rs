//! Job posting domain entities.

pub mod id;
pub mod model;
pub mod patch;
pub mod seed;

pub use id::JobId;
pub use model::{CreateJob, Job};
pub use patch::UpdateJob;
pub use seed::seed_jobs;
