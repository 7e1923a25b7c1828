//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use jobspark_entity::CreateJob;
use jobspark_service::job::REQUIRED_FIELDS_MESSAGE;

/// Body of `POST /api/jobs`.
///
/// The mandatory fields are optional here so a missing field surfaces as a
/// validation error rather than a deserialization failure. Unknown fields,
/// including `id`, `hot` and `postedDays`, are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    /// Position title. Required.
    #[validate(
        required(message = "title is required"),
        length(min = 1, message = "title is required")
    )]
    pub title: Option<String>,
    /// Hiring company. Required.
    #[validate(
        required(message = "company is required"),
        length(min = 1, message = "company is required")
    )]
    pub company: Option<String>,
    /// Long description. Required.
    #[validate(
        required(message = "description is required"),
        length(min = 1, message = "description is required")
    )]
    pub description: Option<String>,
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

impl CreateJobRequest {
    /// Validates the mandatory fields.
    ///
    /// Any failure collapses into the single message clients expect.
    pub fn check(&self) -> Result<(), String> {
        self.validate()
            .map_err(|_| REQUIRED_FIELDS_MESSAGE.to_string())
    }

    /// Converts into the domain payload.
    pub fn into_create_job(self) -> CreateJob {
        CreateJob {
            category: self.category,
            employment_type: self.employment_type,
            mode: self.mode,
            location: self.location,
            level: self.level,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            logo: self.logo,
            tags: self.tags,
            featured: self.featured,
            requirements: self.requirements,
            benefits: self.benefits,
            ..CreateJob::new(
                self.title.unwrap_or_default(),
                self.company.unwrap_or_default(),
                self.description.unwrap_or_default(),
            )
        }
    }
}
