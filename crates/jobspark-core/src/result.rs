//! Convenience result type alias for JobSpark.

use crate::error::AppError;

/// A specialized `Result` type for JobSpark operations.
pub type AppResult<T> = Result<T, AppError>;
