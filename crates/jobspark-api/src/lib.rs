//! # jobspark-api
//!
//! HTTP API layer for JobSpark built on Axum.
//!
//! Provides the REST endpoints under `/api`, the static front-end fallback,
//! middleware (CORS, compression, request logging), extractors, DTOs, and
//! the mapping from domain errors to JSON error responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
