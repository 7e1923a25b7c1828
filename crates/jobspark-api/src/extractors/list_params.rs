//! Query string extractor for `GET /api/jobs`.
//!
//! Parsing is lenient: empty values are treated as absent, numbers that do
//! not parse fall back to their defaults, and the first occurrence of a
//! repeated key wins. The extractor never rejects a request.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use jobspark_core::config::PaginationConfig;
use jobspark_core::types::{JobSort, PageRequest};
use jobspark_service::JobQuery;

/// Raw listing parameters, one `Option<String>` per recognised key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListJobsParams {
    /// `q`: free-text search term.
    pub q: Option<String>,
    /// `location` filter.
    pub location: Option<String>,
    /// `type` filter.
    pub employment_type: Option<String>,
    /// `level` filter.
    pub level: Option<String>,
    /// `category` filter.
    pub category: Option<String>,
    /// `mode` filter.
    pub mode: Option<String>,
    /// `salaryMin`, unparsed.
    pub salary_min: Option<String>,
    /// `sort` mode, unparsed.
    pub sort: Option<String>,
    /// `page`, unparsed.
    pub page: Option<String>,
    /// `limit`, unparsed.
    pub limit: Option<String>,
}

impl ListJobsParams {
    /// Builds the params from decoded key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "q" => &mut params.q,
                "location" => &mut params.location,
                "type" => &mut params.employment_type,
                "level" => &mut params.level,
                "category" => &mut params.category,
                "mode" => &mut params.mode,
                "salaryMin" => &mut params.salary_min,
                "sort" => &mut params.sort,
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                _ => continue,
            };
            if slot.is_none() {
                let value = value.into();
                if !value.is_empty() {
                    *slot = Some(value);
                }
            }
        }
        params
    }

    /// Normalises into a [`JobQuery`] using the configured page sizes.
    pub fn into_query(self, pagination: &PaginationConfig) -> JobQuery {
        let page = parse_int(self.page.as_deref())
            .map(|p| p.max(1) as u64)
            .unwrap_or(1);

        let limit = match parse_int(self.limit.as_deref()) {
            Some(l) if l >= 1 => (l as u64).min(pagination.max_limit),
            _ => pagination.default_limit,
        };

        JobQuery {
            q: self.q,
            location: self.location,
            employment_type: self.employment_type,
            level: self.level,
            category: self.category,
            mode: self.mode,
            salary_min: parse_int(self.salary_min.as_deref()),
            sort: JobSort::parse(self.sort.as_deref()),
            page: PageRequest::new(page, limit),
        }
    }
}

fn parse_int(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse().ok())
}

impl<S> FromRequestParts<S> for ListJobsParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_else(|rejection| {
                tracing::debug!(error = %rejection, "Unparseable query string ignored");
                Vec::new()
            });

        Ok(Self::from_pairs(pairs))
    }
}
