//! Listing pipeline behind `GET /api/jobs`.
//!
//! Stages run in a fixed order over a snapshot of the collection:
//! text search, then the filter chain, then a stable sort, then pagination.
//! Nothing here touches the store, so the same snapshot and query always
//! produce the same page.

use std::cmp::Ordering;

use jobspark_core::types::{JobSort, PageRequest, PageResponse};
use jobspark_entity::Job;
use jobspark_entity::job::model::REMOTE;

/// A fully normalised listing query. Absent filters are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobQuery {
    /// Free-text term matched against title, company, category and tags.
    pub q: Option<String>,
    /// Location substring (case-insensitive). `"Remote"` also matches remote mode.
    pub location: Option<String>,
    /// Exact employment type.
    pub employment_type: Option<String>,
    /// Exact seniority level.
    pub level: Option<String>,
    /// Exact category.
    pub category: Option<String>,
    /// Exact work mode.
    pub mode: Option<String>,
    /// Keep jobs whose upper salary band reaches at least this value.
    pub salary_min: Option<i64>,
    /// Ordering of the result.
    pub sort: JobSort,
    /// Which page to return.
    pub page: PageRequest,
}

impl JobQuery {
    fn matches_text(job: &Job, needle: &str) -> bool {
        contains_ignore_case(&job.title, needle)
            || contains_ignore_case(&job.company, needle)
            || job.tags.iter().any(|tag| contains_ignore_case(tag, needle))
            || contains_ignore_case(&job.category, needle)
    }

    fn matches_filters(&self, job: &Job) -> bool {
        if let Some(location) = &self.location {
            let remote_match = location == REMOTE && job.mode == REMOTE;
            if !remote_match && !contains_ignore_case(&job.location, &location.to_lowercase()) {
                return false;
            }
        }

        exact(&self.employment_type, &job.employment_type)
            && exact(&self.level, &job.level)
            && exact(&self.category, &job.category)
            && exact(&self.mode, &job.mode)
            && self.salary_min.is_none_or(|min| job.salary_max >= min)
    }
}

/// Run the full pipeline over `jobs` and return the requested page.
pub fn run(jobs: &[Job], query: &JobQuery) -> PageResponse<Job> {
    let needle = query.q.as_deref().map(str::to_lowercase);

    let mut matched: Vec<Job> = jobs
        .iter()
        .filter(|job| {
            needle
                .as_deref()
                .is_none_or(|needle| JobQuery::matches_text(job, needle))
        })
        .filter(|job| query.matches_filters(job))
        .cloned()
        .collect();

    sort_jobs(&mut matched, query.sort);
    query.page.paginate(matched)
}

/// Stable in-place sort; equal keys keep their collection order.
pub fn sort_jobs(jobs: &mut [Job], sort: JobSort) {
    match sort {
        JobSort::Recent => jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        JobSort::SalaryHigh => jobs.sort_by(|a, b| b.salary_max.cmp(&a.salary_max)),
        JobSort::SalaryLow => jobs.sort_by_key(|job| job.salary_min),
        JobSort::Featured => jobs.sort_by(featured_then_hot),
    }
}

fn featured_then_hot(a: &Job, b: &Job) -> Ordering {
    b.featured.cmp(&a.featured).then(b.hot.cmp(&a.hot))
}

/// `needle` must already be lower-cased.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn exact(filter: &Option<String>, value: &str) -> bool {
    filter.as_deref().is_none_or(|expected| expected == value)
}
