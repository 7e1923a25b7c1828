//! Job posting handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;

use jobspark_core::error::AppError;
use jobspark_entity::{Job, UpdateJob};

use crate::dto::request::CreateJobRequest;
use crate::dto::response::{DeleteJobResponse, JobListResponse};
use crate::error::ApiError;
use crate::extractors::{ApiJson, JobIdPath, ListJobsParams};
use crate::state::AppState;

/// GET /api/jobs
pub async fn list_jobs(
    State(state): State<AppState>,
    params: ListJobsParams,
) -> Result<Json<JobListResponse>, ApiError> {
    let query = params.into_query(&state.config.pagination);
    let page = state.job_service.list(&query).await?;
    Ok(Json(page.into()))
}

/// GET /api/jobs/{id}
pub async fn get_job(
    State(state): State<AppState>,
    JobIdPath(id): JobIdPath,
) -> Result<Json<Job>, ApiError> {
    let job = state.job_service.get(id).await?;
    Ok(Json(job))
}

/// POST /api/jobs
pub async fn create_job(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateJobRequest>,
) -> Result<(StatusCode, Json<Job>), ApiError> {
    req.check().map_err(AppError::validation)?;

    let job = state.job_service.create(req.into_create_job()).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// PATCH /api/jobs/{id}
///
/// The id is resolved before the body is looked at, so an unknown id is a
/// 404 whatever the payload. A blank body leaves the record unchanged.
pub async fn update_job(
    State(state): State<AppState>,
    JobIdPath(id): JobIdPath,
    body: Bytes,
) -> Result<Json<Job>, ApiError> {
    state.job_service.get(id).await?;

    let patch = ApiJson::<UpdateJob>::parse_or_default(&body)?;
    let job = state.job_service.update(id, patch).await?;
    Ok(Json(job))
}

/// DELETE /api/jobs/{id}
pub async fn delete_job(
    State(state): State<AppState>,
    JobIdPath(id): JobIdPath,
) -> Result<Json<DeleteJobResponse>, ApiError> {
    let job = state.job_service.delete(id).await?;
    Ok(Json(DeleteJobResponse::new(job)))
}
