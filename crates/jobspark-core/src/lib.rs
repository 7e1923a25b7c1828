//! # jobspark-core
//!
//! Core crate for JobSpark. Contains the repository trait, configuration
//! schemas, pagination and sort types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other JobSpark crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
