//! Typed path parameter extractor for job ids.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use jobspark_core::error::AppError;
use jobspark_entity::JobId;
use jobspark_service::job::NOT_FOUND_MESSAGE;

use crate::error::ApiError;

/// The `{id}` segment of `/api/jobs/{id}`.
///
/// An id that is not a non-negative integer can never match a record, so it
/// is rejected with the same 404 as an unknown id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobIdPath(pub JobId);

impl<S> FromRequestParts<S> for JobIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::not_found(NOT_FOUND_MESSAGE))?;

        raw.parse::<JobId>()
            .map(JobIdPath)
            .map_err(|_| AppError::not_found(NOT_FOUND_MESSAGE).into())
    }
}
