//! Partial update payload for job postings.

use serde::{Deserialize, Serialize};

use super::model::Job;

/// Field-level patch for an existing job.
///
/// Every field is optional; only the ones present are written. Unknown
/// field names are rejected at deserialization time, and `id` / `createdAt`
/// are deliberately absent so they can never be overwritten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateJob {
    /// New position title.
    pub title: Option<String>,
    /// New hiring company.
    pub company: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New employment type (`type` on the wire).
    #[serde(rename = "type")]
    pub employment_type: Option<String>,
    /// New work mode.
    pub mode: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New seniority level.
    pub level: Option<String>,
    /// New lower salary band.
    pub salary_min: Option<i64>,
    /// New upper salary band.
    pub salary_max: Option<i64>,
    /// New icon token.
    pub logo: Option<String>,
    /// Replacement tag list.
    pub tags: Option<Vec<String>>,
    /// Featured flag.
    pub featured: Option<bool>,
    /// Hot flag.
    pub hot: Option<bool>,
    /// Informational age in days.
    pub posted_days: Option<i64>,
    /// New long description.
    pub description: Option<String>,
    /// Replacement requirement list.
    pub requirements: Option<Vec<String>>,
    /// Replacement benefit list.
    pub benefits: Option<Vec<String>>,
}

impl UpdateJob {
    /// Write every supplied field onto `job`.
    pub fn apply_to(self, job: &mut Job) {
        let patch = self;
        macro_rules! merge {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(value) = patch.$field {
                        job.$field = value;
                    }
                )*
            };
        }

        merge!(
            title,
            company,
            category,
            employment_type,
            mode,
            location,
            level,
            salary_min,
            salary_max,
            logo,
            tags,
            featured,
            hot,
            posted_days,
            description,
            requirements,
            benefits,
        );
    }
}
