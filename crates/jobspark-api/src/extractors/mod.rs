//! Custom Axum extractors.

pub mod json;
pub mod list_params;
pub mod path;

pub use json::ApiJson;
pub use list_params::ListJobsParams;
pub use path::JobIdPath;
