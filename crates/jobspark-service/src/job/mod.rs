//! Job posting services.

pub mod service;

pub use service::{JobService, NOT_FOUND_MESSAGE, REQUIRED_FIELDS_MESSAGE};
