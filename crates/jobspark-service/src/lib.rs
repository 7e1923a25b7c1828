//! # jobspark-service
//!
//! Business logic for JobSpark. Services receive the job repository at
//! construction time through an `Arc` and never reach for global state.
//!
//! - [`JobService`] validates and forwards CRUD calls to the store.
//! - [`query`] is the pure listing pipeline: search, filter, sort, paginate.
//! - [`StatsService`] aggregates board-wide counters.

pub mod job;
pub mod query;
pub mod stats;

pub use job::JobService;
pub use query::JobQuery;
pub use stats::{JobStats, StatsService};
