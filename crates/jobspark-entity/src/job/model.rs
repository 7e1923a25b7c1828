//! Job posting entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::JobId;

const DEFAULT_CATEGORY: &str = "Engineering";
const DEFAULT_TYPE: &str = "Full-time";
const DEFAULT_MODE: &str = "Remote";
const DEFAULT_LOCATION: &str = "Remote";
const DEFAULT_LEVEL: &str = "Mid Level";
const DEFAULT_SALARY_MIN: i64 = 80;
const DEFAULT_SALARY_MAX: i64 = 120;
const DEFAULT_LOGO: &str = "💼";

/// Work mode value that the `location=Remote` filter also matches on.
pub const REMOTE: &str = "Remote";

/// A job posting on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique job identifier.
    pub id: JobId,
    /// Position title.
    pub title: String,
    /// Hiring company.
    pub company: String,
    /// Department or discipline, e.g. `"Engineering"`.
    pub category: String,
    /// Employment type, e.g. `"Full-time"`.
    #[serde(rename = "type")]
    pub employment_type: String,
    /// Work mode: `"Remote"`, `"Hybrid"`, `"On-site"`.
    pub mode: String,
    /// Free-form location.
    pub location: String,
    /// Seniority, e.g. `"Senior"`.
    pub level: String,
    /// Lower salary band (thousands).
    pub salary_min: i64,
    /// Upper salary band (thousands).
    pub salary_max: i64,
    /// Short icon token shown next to the company.
    pub logo: String,
    /// Skill tags.
    pub tags: Vec<String>,
    /// Pinned to the top of the default listing.
    pub featured: bool,
    /// Marked as in high demand.
    pub hot: bool,
    /// Days since posting, informational only.
    pub posted_days: i64,
    /// Long description.
    pub description: String,
    /// Candidate requirements.
    pub requirements: Vec<String>,
    /// Perks.
    pub benefits: Vec<String>,
    /// When the posting was created.
    pub created_at: DateTime<Utc>,
}

impl Job {
    /// Whether the posting is fully remote.
    pub fn is_remote(&self) -> bool {
        self.mode == REMOTE
    }
}

/// Data required to create a new job record.
///
/// Only `title`, `company` and `description` are mandatory; anything left as
/// `None` (or an empty string) takes the board default when the record is
/// built. `hot` and `postedDays` always start at `false` / `0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJob {
    /// Position title.
    pub title: String,
    /// Hiring company.
    pub company: String,
    /// Long description.
    pub description: String,
    /// Category.
    pub category: Option<String>,
    /// Employment type.
    #[serde(rename = "type")]
    pub employment_type: Option<String>,
    /// Work mode.
    pub mode: Option<String>,
    /// Location.
    pub location: Option<String>,
    /// Seniority level.
    pub level: Option<String>,
    /// Lower salary band.
    pub salary_min: Option<i64>,
    /// Upper salary band.
    pub salary_max: Option<i64>,
    /// Icon token.
    pub logo: Option<String>,
    /// Skill tags.
    pub tags: Option<Vec<String>>,
    /// Featured flag.
    pub featured: Option<bool>,
    /// Candidate requirements.
    pub requirements: Option<Vec<String>>,
    /// Perks.
    pub benefits: Option<Vec<String>>,
}

impl CreateJob {
    /// Create a payload with just the mandatory fields.
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Build the stored record, filling every absent field with its default.
    pub fn into_job(self, id: JobId, created_at: DateTime<Utc>) -> Job {
        Job {
            id,
            title: self.title,
            company: self.company,
            category: or_default(self.category, DEFAULT_CATEGORY),
            employment_type: or_default(self.employment_type, DEFAULT_TYPE),
            mode: or_default(self.mode, DEFAULT_MODE),
            location: or_default(self.location, DEFAULT_LOCATION),
            level: or_default(self.level, DEFAULT_LEVEL),
            salary_min: self.salary_min.unwrap_or(DEFAULT_SALARY_MIN),
            salary_max: self.salary_max.unwrap_or(DEFAULT_SALARY_MAX),
            logo: or_default(self.logo, DEFAULT_LOGO),
            tags: self.tags.unwrap_or_default(),
            featured: self.featured.unwrap_or(false),
            hot: false,
            posted_days: 0,
            description: self.description,
            requirements: self.requirements.unwrap_or_default(),
            benefits: self.benefits.unwrap_or_default(),
            created_at,
        }
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
