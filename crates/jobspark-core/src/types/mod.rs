//! Core type definitions used across the JobSpark workspace.

pub mod pagination;
pub mod sorting;

pub use pagination::{PageRequest, PageResponse};
pub use sorting::JobSort;
