//! Route definitions for the JobSpark HTTP API.
//!
//! API routes are mounted under `/api`. Every other path is served from the
//! static front-end directory, falling back to its `index.html`.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;
use crate::state::AppState;

/// Build the router with all routes and the static fallback.
pub fn build_router(state: AppState) -> Router {
    let static_dir = Path::new(&state.config.server.static_dir);
    let front_end =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let api_routes = Router::new()
        .merge(job_routes())
        .merge(stats_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(front_end)
        .with_state(state)
}

/// Job CRUD and listing
fn job_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/jobs",
            get(handlers::jobs::list_jobs).post(handlers::jobs::create_job),
        )
        .route(
            "/jobs/{id}",
            get(handlers::jobs::get_job)
                .patch(handlers::jobs::update_job)
                .delete(handlers::jobs::delete_job),
        )
}

fn stats_routes() -> Router<AppState> {
    Router::new().route("/stats", get(handlers::stats::get_stats))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
