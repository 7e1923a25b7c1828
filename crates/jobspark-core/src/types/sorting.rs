//! Sort modes for the job listing.

use serde::{Deserialize, Serialize};

/// How a job listing is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobSort {
    /// Featured postings first, then hot ones; otherwise collection order.
    #[default]
    Featured,
    /// Newest `createdAt` first.
    Recent,
    /// Highest `salaryMax` first.
    SalaryHigh,
    /// Lowest `salaryMin` first.
    SalaryLow,
}

impl JobSort {
    /// Parse a `sort` query value. Matching is exact; absent or unrecognised
    /// values fall back to [`JobSort::Featured`].
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("recent") => Self::Recent,
            Some("salary_high") => Self::SalaryHigh,
            Some("salary_low") => Self::SalaryLow,
            _ => Self::Featured,
        }
    }

    /// The query-string spelling of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::Recent => "recent",
            Self::SalaryHigh => "salary_high",
            Self::SalaryLow => "salary_low",
        }
    }
}
