//! Board statistics handler.

use axum::Json;
use axum::extract::State;

use jobspark_service::JobStats;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<JobStats>, ApiError> {
    let stats = state.stats_service.stats().await?;
    Ok(Json(stats))
}
