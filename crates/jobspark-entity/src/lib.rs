//! # jobspark-entity
//!
//! Domain entity models for JobSpark. All entities derive `Debug`, `Clone`,
//! `Serialize` and `Deserialize` and use the camelCase field names of the
//! public JSON API.

pub mod job;

pub use job::{CreateJob, Job, JobId, UpdateJob};
